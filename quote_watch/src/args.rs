//! Command-line arguments for the quote watcher.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Ticker symbol to watch. Must be one of the recognized tickers.
    #[clap(long, default_value = "F")]
    pub symbol: String,

    /// Delay between refreshes in milliseconds.
    #[clap(long, default_value_t = 1000)]
    pub interval_ms: u64,

    /// Stop after this many refreshes. Runs until Ctrl+C when omitted.
    #[clap(long)]
    pub ticks: Option<u64>,

    /// Price the simulated feed starts from.
    #[clap(long, default_value_t = 100.0)]
    pub start_price: f64,

    /// Previous close used for change calculations. Defaults to the start price.
    #[clap(long)]
    pub close: Option<f64>,

    /// Make every n-th fetch of the simulated feed fail.
    #[clap(long)]
    pub fail_every: Option<u64>,

    /// Run without audio cues.
    #[clap(long)]
    pub mute: bool,

    /// Print every fetched quote to stdout as a JSON line.
    #[clap(long)]
    pub json: bool,
}
