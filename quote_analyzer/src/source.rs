//! Quote source capability consumed by the analyzer.
use quote_common::Quote;
use quote_common::error::SourceFault;

/// Supplier of quote snapshots for a single ticker.
///
/// Implementations may block (network feeds, simulators with pacing); any
/// timeout is the implementation's responsibility. Faults are reported as a
/// boxed error and translated by the analyzer into a connection error.
pub trait QuoteSource {
    /// Fetches the current quote.
    fn fetch_current_quote(&mut self) -> Result<Quote, SourceFault>;
}

