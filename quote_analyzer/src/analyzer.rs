//! Quote analyzer state machine.
//!
//! A `QuoteAnalyzer` is bound to one validated ticker symbol and one quote source.
//! It starts without data; every successful [`QuoteAnalyzer::refresh`] replaces the
//! held quote wholesale, a failed one leaves it untouched. Metric accessors fail
//! with [`AnalyzerError::InvalidAnalysisState`] until the first quote arrives.
use std::rc::Rc;

use log::{debug, warn};
use quote_common::tickers::{KnownTickers, SymbolValidator};
use quote_common::{AnalyzerError, Quote, Result};

use crate::audio::{AudioBand, AudioSink};
use crate::source::QuoteSource;

/// Tracks the most recent quote of a single ticker and derives metrics from it.
pub struct QuoteAnalyzer {
    symbol: String,
    source: Box<dyn QuoteSource>,
    audio: Option<Rc<dyn AudioSink>>,
    last_quote: Option<Quote>,
}

impl QuoteAnalyzer {
    /// Creates an analyzer validated against the built-in ticker list.
    ///
    /// Fails with `NullReference` when `source` is `None` and with
    /// `InvalidSymbol` when `symbol` is not a known ticker. A missing `audio`
    /// sink is allowed and turns audio feedback into a no-op.
    pub fn new(
        symbol: &str,
        source: Option<Box<dyn QuoteSource>>,
        audio: Option<Rc<dyn AudioSink>>,
    ) -> Result<Self> {
        Self::with_validator(symbol, source, audio, &KnownTickers)
    }

    /// Creates an analyzer whose symbol is checked by `validator`.
    ///
    /// The source is checked before the symbol, so a call with both a missing
    /// source and an unknown symbol reports `NullReference`.
    pub fn with_validator<V>(
        symbol: &str,
        source: Option<Box<dyn QuoteSource>>,
        audio: Option<Rc<dyn AudioSink>>,
        validator: &V,
    ) -> Result<Self>
    where
        V: SymbolValidator + ?Sized,
    {
        let source = source.ok_or(AnalyzerError::NullReference("quote source"))?;
        if !validator.is_valid_symbol(symbol) {
            return Err(AnalyzerError::InvalidSymbol(symbol.to_string()));
        }

        Ok(QuoteAnalyzer {
            symbol: symbol.to_string(),
            source,
            audio,
            last_quote: None,
        })
    }

    /// Pulls a fresh quote from the source and makes it the current one.
    pub fn refresh(&mut self) -> Result<()> {
        match self.source.fetch_current_quote() {
            Ok(quote) => {
                debug!(
                    "{}: refreshed last={} close={} change={}",
                    self.symbol, quote.last_trade, quote.close, quote.change
                );
                self.last_quote = Some(quote);
                Ok(())
            }
            Err(fault) => {
                warn!("{}: quote source failed: {}", self.symbol, fault);
                Err(AnalyzerError::ConnectionError(fault))
            }
        }
    }

    /// Ticker symbol this analyzer was created for.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The quote fetched by the last successful refresh, if any.
    pub fn last_quote(&self) -> Option<&Quote> {
        self.last_quote.as_ref()
    }

    fn quote(&self) -> Result<&Quote> {
        self.last_quote
            .as_ref()
            .ok_or(AnalyzerError::InvalidAnalysisState)
    }

    /// Last traded price.
    pub fn current_price(&self) -> Result<f64> {
        Ok(self.quote()?.last_trade)
    }

    /// Previous session's closing price.
    pub fn previous_close(&self) -> Result<f64> {
        Ok(self.quote()?.close)
    }

    /// Signed change since the previous close.
    pub fn change_since_close(&self) -> Result<f64> {
        Ok(self.quote()?.change)
    }

    /// Returns the last trade price of the current quote.
    ///
    /// No earlier observation is kept, so this is the marker callers diff
    /// against on their next check rather than a delta.
    pub fn change_since_last_check(&self) -> Result<f64> {
        Ok(self.quote()?.last_trade)
    }

    /// Change since close as a fraction of the close (`-0.01` is a 1% drop).
    ///
    /// A zero close yields an infinite or NaN result.
    pub fn percent_change_since_close(&self) -> Result<f64> {
        let quote = self.quote()?;
        Ok(quote.change / quote.close)
    }

    /// Classifies the current percent change without playing anything.
    pub fn audio_band(&self) -> AudioBand {
        match self.percent_change_since_close() {
            Ok(fraction) => AudioBand::from_fraction(fraction),
            Err(_) => AudioBand::Error,
        }
    }

    /// Plays the cue matching the current percent change and returns its band.
    ///
    /// Without a quote the error cue is played. Without a sink nothing is played.
    pub fn play_appropriate_audio(&self) -> AudioBand {
        let band = self.audio_band();
        debug!("{}: audio band {}", self.symbol, band);
        if let Some(sink) = &self.audio {
            band.play(sink.as_ref());
        }
        band
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::error::SourceFault;
    use std::cell::Cell;
    use std::collections::{HashSet, VecDeque};

    /// Quote source replaying a fixed script; an exhausted script is a fault.
    struct ScriptedSource {
        script: VecDeque<std::result::Result<Quote, String>>,
    }

    impl ScriptedSource {
        fn new(script: Vec<std::result::Result<Quote, String>>) -> Self {
            ScriptedSource {
                script: script.into(),
            }
        }
    }

    impl QuoteSource for ScriptedSource {
        fn fetch_current_quote(&mut self) -> std::result::Result<Quote, SourceFault> {
            match self.script.pop_front() {
                Some(Ok(quote)) => Ok(quote),
                Some(Err(msg)) => Err(msg.into()),
                None => Err("script exhausted".into()),
            }
        }
    }

    #[derive(Default)]
    struct CountingSink {
        happy: Cell<usize>,
        sad: Cell<usize>,
        error: Cell<usize>,
    }

    impl CountingSink {
        fn counts(&self) -> (usize, usize, usize) {
            (self.happy.get(), self.sad.get(), self.error.get())
        }
    }

    impl AudioSink for CountingSink {
        fn play_happy_music(&self) {
            self.happy.set(self.happy.get() + 1);
        }

        fn play_sad_music(&self) {
            self.sad.set(self.sad.get() + 1);
        }

        fn play_error_music(&self) {
            self.error.set(self.error.get() + 1);
        }
    }

    fn source(script: Vec<std::result::Result<Quote, String>>) -> Option<Box<dyn QuoteSource>> {
        Some(Box::new(ScriptedSource::new(script)))
    }

    fn sink(counter: &Rc<CountingSink>) -> Option<Rc<dyn AudioSink>> {
        let shared: Rc<dyn AudioSink> = counter.clone();
        Some(shared)
    }

    fn quote(change: f64, close: f64) -> Quote {
        Quote::new("F", close + change, close, change)
    }

    /// Analyzer for "F" refreshed once with the given change/close pair.
    fn refreshed(change: f64, close: f64, counter: &Rc<CountingSink>) -> QuoteAnalyzer {
        let mut analyzer =
            QuoteAnalyzer::new("F", source(vec![Ok(quote(change, close))]), sink(counter)).unwrap();
        analyzer.refresh().unwrap();
        analyzer
    }

    #[test]
    fn new_rejects_unknown_symbol() {
        let result = QuoteAnalyzer::new("ZZZZZZZZZ", source(vec![]), None);
        assert!(matches!(result, Err(AnalyzerError::InvalidSymbol(s)) if s == "ZZZZZZZZZ"));
    }

    #[test]
    fn new_rejects_missing_source() {
        let counter = Rc::new(CountingSink::default());
        let result = QuoteAnalyzer::new("F", None, sink(&counter));
        assert!(matches!(result, Err(AnalyzerError::NullReference(_))));

        let result = QuoteAnalyzer::new("ZZZZZZZZZ", None, None);
        assert!(matches!(result, Err(AnalyzerError::NullReference(_))));
    }

    #[test]
    fn new_accepts_missing_audio_sink() {
        let analyzer = QuoteAnalyzer::new("F", source(vec![]), None).unwrap();
        assert_eq!(analyzer.play_appropriate_audio(), AudioBand::Error);
    }

    #[test]
    fn missing_audio_sink_still_classifies_every_band() {
        let mut analyzer = QuoteAnalyzer::new(
            "F",
            source(vec![Ok(quote(5.0, 5.0)), Ok(quote(-1.0, 10.0))]),
            None,
        )
        .unwrap();

        analyzer.refresh().unwrap();
        assert_eq!(analyzer.play_appropriate_audio(), AudioBand::Happy);

        analyzer.refresh().unwrap();
        assert_eq!(analyzer.play_appropriate_audio(), AudioBand::Sad);
    }

    #[test]
    fn with_validator_uses_injected_lookup() {
        let custom = |symbol: &str| symbol == "ACME";
        assert!(QuoteAnalyzer::with_validator("ACME", source(vec![]), None, &custom).is_ok());
        assert!(matches!(
            QuoteAnalyzer::with_validator("F", source(vec![]), None, &custom),
            Err(AnalyzerError::InvalidSymbol(_))
        ));

        let set: HashSet<String> = ["ZZZZZZZZZ".to_string()].into_iter().collect();
        assert!(QuoteAnalyzer::with_validator("ZZZZZZZZZ", source(vec![]), None, &set).is_ok());
    }

    #[test]
    fn accessors_fail_before_first_refresh() {
        let analyzer = QuoteAnalyzer::new("F", source(vec![]), None).unwrap();
        assert!(matches!(analyzer.current_price(), Err(AnalyzerError::InvalidAnalysisState)));
        assert!(matches!(analyzer.previous_close(), Err(AnalyzerError::InvalidAnalysisState)));
        assert!(matches!(analyzer.change_since_close(), Err(AnalyzerError::InvalidAnalysisState)));
        assert!(matches!(
            analyzer.change_since_last_check(),
            Err(AnalyzerError::InvalidAnalysisState)
        ));
        assert!(matches!(
            analyzer.percent_change_since_close(),
            Err(AnalyzerError::InvalidAnalysisState)
        ));
        assert!(analyzer.last_quote().is_none());
        assert_eq!(analyzer.symbol(), "F");
    }

    #[test]
    fn refresh_exposes_quote_fields() {
        let mut analyzer = QuoteAnalyzer::new(
            "F",
            source(vec![Ok(Quote::new("F", 90.0, 80.0, 3.0))]),
            None,
        )
        .unwrap();
        analyzer.refresh().unwrap();

        assert_eq!(analyzer.current_price().unwrap(), 90.0);
        assert_eq!(analyzer.previous_close().unwrap(), 80.0);
        assert_eq!(analyzer.change_since_close().unwrap(), 3.0);
        assert_eq!(analyzer.change_since_last_check().unwrap(), 90.0);
        assert_eq!(analyzer.last_quote(), Some(&Quote::new("F", 90.0, 80.0, 3.0)));
    }

    #[test]
    fn refresh_replaces_previous_quote() {
        let mut analyzer = QuoteAnalyzer::new(
            "F",
            source(vec![
                Ok(Quote::new("F", 90.0, 80.0, 3.0)),
                Ok(Quote::new("F", 20.1, 4.1, -5.6)),
            ]),
            None,
        )
        .unwrap();
        analyzer.refresh().unwrap();
        analyzer.refresh().unwrap();

        assert_eq!(analyzer.current_price().unwrap(), 20.1);
        assert_eq!(analyzer.previous_close().unwrap(), 4.1);
        assert_eq!(analyzer.change_since_close().unwrap(), -5.6);
    }

    #[test]
    fn failed_refresh_reports_connection_error_and_keeps_quote() {
        let mut analyzer = QuoteAnalyzer::new(
            "F",
            source(vec![
                Ok(Quote::new("F", 90.0, 80.0, 3.0)),
                Err("socket closed".to_string()),
            ]),
            None,
        )
        .unwrap();
        analyzer.refresh().unwrap();

        let err = analyzer.refresh().unwrap_err();
        assert!(matches!(err, AnalyzerError::ConnectionError(_)));
        assert!(err.to_string().contains("socket closed"));
        assert_eq!(analyzer.current_price().unwrap(), 90.0);
        assert_eq!(analyzer.last_quote(), Some(&Quote::new("F", 90.0, 80.0, 3.0)));
    }

    #[test]
    fn failed_first_refresh_leaves_analyzer_empty() {
        let mut analyzer = QuoteAnalyzer::new("F", source(vec![]), None).unwrap();
        assert!(matches!(analyzer.refresh(), Err(AnalyzerError::ConnectionError(_))));
        assert!(matches!(analyzer.current_price(), Err(AnalyzerError::InvalidAnalysisState)));
    }

    #[test]
    fn percent_change_is_a_plain_fraction() {
        let counter = Rc::new(CountingSink::default());
        let analyzer = refreshed(-5.0, 10000.0, &counter);
        assert_eq!(analyzer.percent_change_since_close().unwrap(), -0.0005);
    }

    #[test]
    fn percent_change_over_zero_close_is_not_guarded() {
        let counter = Rc::new(CountingSink::default());
        let analyzer = refreshed(1.0, 0.0, &counter);
        assert_eq!(analyzer.percent_change_since_close().unwrap(), f64::INFINITY);
    }

    #[test]
    fn positive_change_plays_happy_music_once() {
        let counter = Rc::new(CountingSink::default());
        let analyzer = refreshed(5.0, 5.0, &counter);
        assert_eq!(analyzer.play_appropriate_audio(), AudioBand::Happy);
        assert_eq!(counter.counts(), (1, 0, 0));
    }

    #[test]
    fn ten_percent_drop_plays_sad_music_once() {
        let counter = Rc::new(CountingSink::default());
        let analyzer = refreshed(-1.0, 10.0, &counter);
        assert_eq!(analyzer.play_appropriate_audio(), AudioBand::Sad);
        assert_eq!(counter.counts(), (0, 1, 0));
    }

    #[test]
    fn exactly_one_percent_drop_plays_sad_music_once() {
        let counter = Rc::new(CountingSink::default());
        let analyzer = refreshed(-10.0, 1000.0, &counter);
        assert_eq!(analyzer.play_appropriate_audio(), AudioBand::Sad);
        assert_eq!(counter.counts(), (0, 1, 0));
    }

    #[test]
    fn small_drop_plays_nothing() {
        let counter = Rc::new(CountingSink::default());
        let analyzer = refreshed(-5.0, 10000.0, &counter);
        assert_eq!(analyzer.play_appropriate_audio(), AudioBand::Neutral);
        assert_eq!(counter.counts(), (0, 0, 0));
    }

    #[test]
    fn missing_quote_plays_error_music_once() {
        let counter = Rc::new(CountingSink::default());
        let analyzer = QuoteAnalyzer::new("F", source(vec![]), sink(&counter)).unwrap();
        assert_eq!(analyzer.play_appropriate_audio(), AudioBand::Error);
        assert_eq!(counter.counts(), (0, 0, 1));
    }

    #[test]
    fn audio_band_does_not_touch_the_sink() {
        let counter = Rc::new(CountingSink::default());
        let analyzer = refreshed(5.0, 5.0, &counter);
        assert_eq!(analyzer.audio_band(), AudioBand::Happy);
        assert_eq!(counter.counts(), (0, 0, 0));
    }

    #[test]
    fn symbol_is_unaffected_by_refresh_state() {
        let mut analyzer = QuoteAnalyzer::new(
            "F",
            source(vec![Ok(Quote::new("F", 1.0, 1.0, 0.0))]),
            None,
        )
        .unwrap();
        assert_eq!(analyzer.symbol(), "F");
        analyzer.refresh().unwrap();
        assert_eq!(analyzer.symbol(), "F");
        let _ = analyzer.refresh();
        assert_eq!(analyzer.symbol(), "F");
    }
}
