//! Browser adapters for the Stock Chat core ports.

pub mod insights;
pub mod market;
