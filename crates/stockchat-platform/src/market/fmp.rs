//! Financial data adapter for the Financial Modeling Prep REST API.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.
//! The API key travels as the `apikey` query parameter. Failures are
//! logged and handed back to the caller; nothing is retried.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use stockchat_core::market::{cap, check_status, first_quote, normalize_symbol};
use stockchat_core::ports::MarketDataPort;
use stockchat_types::{
    ChatError, Result,
    config::MarketDataConfig,
    market::{NewsItem, Quote},
};

pub struct FmpClient {
    config: MarketDataConfig,
}

impl FmpClient {
    pub fn new(config: MarketDataConfig) -> Self {
        Self { config }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    pub fn quote_url(&self, symbol: &str) -> String {
        format!("{}/quote/{}", self.base_url(), symbol)
    }

    pub fn news_url(&self) -> String {
        format!("{}/stock_news", self.base_url())
    }

    async fn get_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        check_status(response.status(), body)?;
    }
    response
        .json()
        .await
        .map_err(|e| ChatError::Serialization(e.to_string()))
}

impl FmpClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote> {
        let symbol = normalize_symbol(symbol)?;
        let request = Request::get(&self.quote_url(&symbol))
            .query([("apikey", self.config.api_key.as_str())])
            .build()
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let quotes = self.get_json::<Vec<Quote>>(request).await?;
        first_quote(quotes, &symbol)
    }

    async fn fetch_news(&self, symbol: &str, limit: u32) -> Result<Vec<NewsItem>> {
        let symbol = normalize_symbol(symbol)?;
        let limit_param = limit.to_string();
        let request = Request::get(&self.news_url())
            .query([
                ("tickers", symbol.as_str()),
                ("limit", limit_param.as_str()),
                ("apikey", self.config.api_key.as_str()),
            ])
            .build()
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let items = self.get_json::<Vec<NewsItem>>(request).await?;
        Ok(cap(items, limit))
    }
}

#[async_trait(?Send)]
impl MarketDataPort for FmpClient {
    async fn quote(&self, symbol: &str) -> Result<Quote> {
        let result = self.fetch_quote(symbol).await;
        if let Err(e) = &result {
            log::error!("Error fetching stock quote: {}", e);
        }
        result
    }

    async fn news(&self, symbol: &str, limit: u32) -> Result<Vec<NewsItem>> {
        let result = self.fetch_news(symbol, limit).await;
        if let Err(e) = &result {
            log::error!("Error fetching stock news: {}", e);
        }
        result
    }
}
