//! Quote Watch — drives a `QuoteAnalyzer` against a simulated quote feed and reports
//! price movements in the terminal. On every tick the analyzer is refreshed, the
//! current metrics are logged and the matching audio cue is played.
//!
//! Usage example (CLI):
//! ```bash
//! quote_watch --symbol F --interval-ms 500 --ticks 20 --close 101.5 --fail-every 7
//! ```
//!
//! Logging verbosity follows `RUST_LOG` (default `info`).
#![warn(missing_docs)]
mod args;
mod generator;
mod speaker;

use crate::args::Args;
use crate::generator::RandomWalkSource;
use crate::speaker::TerminalSpeaker;
use chrono::Local;
use clap::Parser;
use crossbeam_channel::{bounded, select, tick};
use log::{error, info, warn};
use quote_analyzer::{AudioSink, QuoteAnalyzer, QuoteSource};
use quote_common::AnalyzerError;
use quote_common::Result;
use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

fn main() -> Result<(), AnalyzerError> {
    init_logger();
    let args = Args::parse();
    let mut analyzer = build_analyzer(&args)?;

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down watcher...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| AnalyzerError::Setup(format!("Failed to set Ctrl+C handler: {}", e)))?;

    let ticker = tick(Duration::from_millis(args.interval_ms));
    let mut refreshes: u64 = 0;
    info!(
        "Watching {} every {} ms. Press Ctrl+C to exit.",
        analyzer.symbol(),
        args.interval_ms
    );

    loop {
        if args.ticks.is_some_and(|limit| refreshes >= limit) {
            break;
        }
        select! {
            recv(shutdown_rx) -> _ => break,
            recv(ticker) -> _ => {
                refreshes += 1;
                match analyzer.refresh() {
                    Ok(()) => report(&analyzer, args.json)?,
                    Err(e) => warn!("Refresh #{} failed: {}", refreshes, e),
                }
                analyzer.play_appropriate_audio();
            }
        }
    }

    info!("Watcher stopped after {} refreshes.", refreshes);
    Ok(())
}

/// Builds the analyzer from CLI arguments, validating them first.
fn build_analyzer(args: &Args) -> Result<QuoteAnalyzer> {
    if args.interval_ms == 0 {
        return Err(AnalyzerError::Setup(
            "--interval-ms must be greater than zero".to_string(),
        ));
    }
    if !args.start_price.is_finite() || args.start_price <= 0.0 {
        return Err(AnalyzerError::Setup(format!(
            "--start-price must be a positive number, got {}",
            args.start_price
        )));
    }

    let close = args.close.unwrap_or(args.start_price);
    let mut feed = RandomWalkSource::new(&args.symbol, args.start_price, close);
    if let Some(n) = args.fail_every {
        feed = feed.fail_every(n);
    }
    let source: Box<dyn QuoteSource> = Box::new(feed);
    let audio: Option<Rc<dyn AudioSink>> = if args.mute {
        None
    } else {
        Some(Rc::new(TerminalSpeaker))
    };

    match QuoteAnalyzer::new(&args.symbol, Some(source), audio) {
        Ok(analyzer) => Ok(analyzer),
        Err(e) => {
            error!("Cannot watch {}: {}", args.symbol, e);
            Err(e)
        }
    }
}

/// Logs the analyzer's current metrics and optionally prints the quote as JSON.
fn report(analyzer: &QuoteAnalyzer, json: bool) -> Result<()> {
    let price = analyzer.current_price()?;
    let change = analyzer.change_since_close()?;
    let fraction = analyzer.percent_change_since_close()?;
    info!(
        "[{}] {} Price={:.2} Close={:.2} Change={:+.2} ({:+.2}%)",
        Local::now().format("%H:%M:%S"),
        analyzer.symbol(),
        price,
        analyzer.previous_close()?,
        change,
        fraction * 100.0
    );

    if json {
        if let Some(quote) = analyzer.last_quote() {
            let mut line = quote.to_json_bytes()?;
            line.push(b'\n');
            std::io::stdout().write_all(&line)?;
        }
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
