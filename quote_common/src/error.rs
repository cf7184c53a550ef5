//! Error types shared by the analyzer and its front-ends.
//!
//! The `AnalyzerError` enum covers every failure an analyzer can surface to its
//! caller, plus the few I/O and start-up failures the binaries need, so all
//! crates can propagate a single error type.
use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// Boxed fault reported by a quote source.
pub type SourceFault = Box<dyn StdError + Send + Sync + 'static>;

/// Unified error type shared across the workspace.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The ticker symbol was rejected by the symbol validator.
    #[error("Invalid stock symbol: {0}")]
    InvalidSymbol(String),

    /// A required collaborator was not supplied; contains the collaborator name.
    #[error("Null reference: {0} must be provided")]
    NullReference(&'static str),

    /// The quote source failed to deliver a quote. The underlying fault is kept
    /// as the error source.
    #[error("Stock ticker connection error: {0}")]
    ConnectionError(#[source] SourceFault),

    /// A derived metric was requested before any quote had been fetched.
    #[error("Invalid analysis state: no quote has been fetched yet")]
    InvalidAnalysisState,

    /// I/O error originating from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Start-up failure of a front-end (signal handler, argument sanity checks).
    #[error("Setup error: {0}")]
    Setup(String),
}
