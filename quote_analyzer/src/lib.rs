//! Single-ticker quote analyzer.
//!
//! - `analyzer` — `QuoteAnalyzer`, the refresh/accessor state machine.
//! - `source` — the `QuoteSource` capability supplying quote snapshots.
//! - `audio` — the `AudioSink` capability and `AudioBand` classification.
#![warn(missing_docs)]
pub mod analyzer;
pub mod audio;
pub mod source;

pub use analyzer::QuoteAnalyzer;
pub use audio::{AudioBand, AudioSink};
pub use source::QuoteSource;
