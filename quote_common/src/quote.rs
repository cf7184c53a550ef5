//! Quote data model and JSON encoding helpers.
//!
//! A `Quote` is an immutable snapshot of a ticker's trading data as delivered by
//! a quote source: the last traded price, the previous session's close and the
//! signed change since that close.
use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;

/// Market quote for a single ticker symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol the quote belongs to.
    pub symbol: String,
    /// Last traded price.
    pub last_trade: f64,
    /// Closing price of the previous session.
    pub close: f64,
    /// Signed change of `last_trade` relative to `close`.
    pub change: f64,
}

impl Quote {
    /// Creates a new quote snapshot.
    pub fn new(symbol: &str, last_trade: f64, close: f64, change: f64) -> Self {
        Quote {
            symbol: String::from(symbol),
            last_trade,
            close,
            change,
        }
    }

    /// Encode the quote to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, AnalyzerError> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}
