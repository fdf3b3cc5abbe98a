//! Deadline wrapper for any insight provider.
//!
//! A lookup that never settles would otherwise leave the chat stuck in
//! the pending state; this turns it into a `ChatError::Timeout`.

use async_trait::async_trait;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;

use stockchat_core::ports::InsightPort;
use stockchat_types::{ChatError, Result};

pub struct TimeoutInsights<P> {
    inner: P,
    timeout_ms: u32,
}

impl<P: InsightPort> TimeoutInsights<P> {
    pub fn new(inner: P, timeout_ms: u32) -> Self {
        Self { inner, timeout_ms }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait(?Send)]
impl<P: InsightPort> InsightPort for TimeoutInsights<P> {
    async fn ask(&self, query: &str) -> Result<String> {
        let lookup = self.inner.ask(query);
        let deadline = TimeoutFuture::new(self.timeout_ms);
        pin_mut!(lookup, deadline);

        match select(lookup, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                log::warn!(
                    "Insight provider '{}' timed out after {}ms",
                    self.inner.name(),
                    self.timeout_ms
                );
                Err(ChatError::Timeout(self.timeout_ms as u64))
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
