pub mod mock;
pub mod timeout;

pub use mock::MockInsightProvider;
pub use timeout::TimeoutInsights;
