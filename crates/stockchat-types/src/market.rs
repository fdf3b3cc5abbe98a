//! Market data shapes returned by the financial data provider.
//!
//! The provider defines the JSON; only the fields the UI renders are typed,
//! everything else is kept in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single quote for a ticker symbol
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub changes_percentage: Option<f64>,
    #[serde(default)]
    pub day_low: Option<f64>,
    #[serde(default)]
    pub day_high: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Quote {
    /// One-line summary, e.g. `AAPL  189.84  (+1.25%)`
    pub fn headline(&self) -> String {
        let price = self
            .price
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "n/a".to_string());
        match self.changes_percentage {
            Some(pct) => format!("{}  {}  ({:+.2}%)", self.symbol, price, pct),
            None => format!("{}  {}", self.symbol, price),
        }
    }
}

/// A news article about a ticker symbol
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    pub title: String,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
