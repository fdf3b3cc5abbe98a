//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `stockchat-core` (pure Rust).
//! Implementations live in `stockchat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use stockchat_types::{
    Result,
    market::{NewsItem, Quote},
};

// ─── Insight Port ────────────────────────────────────────────

/// Maps a free-text question to a textual answer.
///
/// Callers must treat every lookup as fallible even when the
/// implementation never fails.
#[async_trait(?Send)]
pub trait InsightPort {
    async fn ask(&self, query: &str) -> Result<String>;

    /// Name of this provider (for logging/debug)
    fn name(&self) -> &str;
}

// ─── Market Data Port ────────────────────────────────────────

#[async_trait(?Send)]
pub trait MarketDataPort {
    /// Latest quote for a ticker symbol
    async fn quote(&self, symbol: &str) -> Result<Quote>;

    /// Recent news for a ticker symbol, at most `limit` items
    async fn news(&self, symbol: &str, limit: u32) -> Result<Vec<NewsItem>>;
}
