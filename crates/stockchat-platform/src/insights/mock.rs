//! Mock insight provider with a simulated network delay.
//!
//! Answers from the core keyword table after waiting `latency_ms`,
//! using browser timers so the UI thread is never blocked.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use stockchat_core::insights::canned_insight;
use stockchat_core::ports::InsightPort;
use stockchat_types::{Result, config::InsightConfig};

pub struct MockInsightProvider {
    latency_ms: u32,
}

impl MockInsightProvider {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }

    pub fn from_config(config: &InsightConfig) -> Self {
        Self::new(config.latency_ms)
    }
}

#[async_trait(?Send)]
impl InsightPort for MockInsightProvider {
    async fn ask(&self, query: &str) -> Result<String> {
        if self.latency_ms > 0 {
            TimeoutFuture::new(self.latency_ms).await;
        }
        Ok(canned_insight(query).to_string())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
