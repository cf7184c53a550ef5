//!
//! Common types shared by the quote analyzer and its front-ends.
//!
//! This crate aggregates:
//! - `error` — unified error type `AnalyzerError` used across the workspace.
//! - `result` — handy `Result<T, AnalyzerError>` alias.
//! - `tickers` — the recognized ticker list and the `SymbolValidator` capability.
//! - `quote` — the `Quote` snapshot delivered by quote sources.
#![warn(missing_docs)]
pub mod error;
pub mod quote;
pub mod result;
pub mod tickers;

pub use error::AnalyzerError;
pub use quote::Quote;
pub use result::Result;
pub use tickers::{KnownTickers, SymbolValidator};
