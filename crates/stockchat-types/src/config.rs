use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub insights: InsightConfig,
    pub market_data: MarketDataConfig,
    pub theme: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Simulated network delay before the mock provider answers
    pub latency_ms: u32,
    /// Lookups slower than this fail with a timeout
    pub timeout_ms: u32,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1000,
            timeout_ms: 30_000,
        }
    }
}

impl InsightConfig {
    /// A timeout shorter than the simulated latency would fail every
    /// lookup. Raises `timeout_ms` to `latency_ms`; returns true if it did.
    pub fn clamp_timeout(&mut self) -> bool {
        if self.timeout_ms < self.latency_ms {
            self.timeout_ms = self.latency_ms;
            true
        } else {
            false
        }
    }

    pub fn timeout_too_short(&self) -> bool {
        self.timeout_ms < self.latency_ms
    }
}

pub const DEFAULT_MARKET_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";
pub const DEFAULT_NEWS_LIMIT: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketDataConfig {
    pub api_key: String,
    pub base_url: String,
    pub news_limit: u32,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_MARKET_BASE_URL.to_string(),
            news_limit: DEFAULT_NEWS_LIMIT,
        }
    }
}

impl MarketDataConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    /// Follow the browser preference; falls back to dark
    System,
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn all() -> &'static [ThemeMode] {
        &[ThemeMode::System, ThemeMode::Dark, ThemeMode::Light]
    }

    pub fn label(&self) -> &str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }

    /// Next mode for the header toggle
    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark | ThemeMode::System => ThemeMode::Light,
        }
    }
}
