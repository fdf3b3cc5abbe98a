//! Helpers shared by market data adapters.

use stockchat_types::{ChatError, Result, market::Quote};

/// Trim and uppercase a ticker, rejecting anything that could not be a
/// symbol (it ends up in a URL path).
pub fn normalize_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_uppercase();
    let valid = !symbol.is_empty()
        && symbol.len() <= 16
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^'));
    if valid {
        Ok(symbol)
    } else {
        Err(ChatError::InvalidSymbol(raw.to_string()))
    }
}

/// Keep at most `limit` items; providers do not always honour the limit.
pub fn cap<T>(mut items: Vec<T>, limit: u32) -> Vec<T> {
    items.truncate(limit as usize);
    items
}

/// The quote endpoint answers with a list; the first entry is the match.
pub fn first_quote(quotes: Vec<Quote>, symbol: &str) -> Result<Quote> {
    quotes
        .into_iter()
        .next()
        .ok_or_else(|| ChatError::NotFound(format!("no quote for {}", symbol)))
}

/// Map a non-2xx status to `ChatError::Http`, keeping the response body.
pub fn check_status(status: u16, body: String) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ChatError::Http { status, body })
    }
}
