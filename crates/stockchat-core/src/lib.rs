//! Stock Chat core: everything that does not touch the browser.
//!
//! The UI and platform crates talk to this crate through the
//! [`ports`] traits and the [`controller::ChatController`].

pub mod ports;
pub mod store;
pub mod controller;
pub mod insights;
pub mod market;
pub mod event_bus;

#[cfg(test)]
mod tests;
