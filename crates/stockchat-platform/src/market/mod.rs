pub mod fmp;

pub use fmp::FmpClient;
