//! Keyword-matching insight lookup.
//!
//! Stands in for a real analysis backend: the query is matched
//! case-insensitively against a few keywords, first match wins.

use async_trait::async_trait;
use stockchat_types::Result;
use crate::ports::InsightPort;

pub const RECOMMENDATION_RESPONSE: &str = "Based on current market trends and company performance, some stocks to consider are: AAPL (Apple), MSFT (Microsoft), and AMZN (Amazon). However, always do your own research and consider consulting with a financial advisor before making investment decisions.";

pub const COMPARISON_RESPONSE: &str = "When comparing stocks, it's important to look at various factors such as P/E ratio, revenue growth, and market cap. For example, comparing AAPL and MSFT: Apple has a P/E ratio of 28.5 and a market cap of $2.64T, while Microsoft has a P/E ratio of 35.9 and a market cap of $2.48T. Both companies show strong financials, but their focus areas differ.";

pub const TREND_RESPONSE: &str = "Current market trends show a shift towards AI and clean energy stocks. Companies like NVDA (NVIDIA) and TSLA (Tesla) have seen significant growth. However, there's also increased volatility due to global economic factors. It's important to diversify your portfolio to mitigate risks.";

pub const FALLBACK_RESPONSE: &str = "I'm sorry, I don't have specific information about that query. Could you please ask about stock recommendations, comparisons between stocks, or current market trends?";

/// Checked in order; the first keyword found in the query decides.
const KEYWORD_RESPONSES: &[(&str, &str)] = &[
    ("recommendation", RECOMMENDATION_RESPONSE),
    ("compare", COMPARISON_RESPONSE),
    ("trend", TREND_RESPONSE),
];

pub fn canned_insight(query: &str) -> &'static str {
    let query = query.to_lowercase();
    KEYWORD_RESPONSES
        .iter()
        .find(|(keyword, _)| query.contains(keyword))
        .map(|(_, response)| *response)
        .unwrap_or(FALLBACK_RESPONSE)
}

/// Answers immediately from the keyword table. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordInsights;

#[async_trait(?Send)]
impl InsightPort for KeywordInsights {
    async fn ask(&self, query: &str) -> Result<String> {
        Ok(canned_insight(query).to_string())
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
