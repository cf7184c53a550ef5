//! Synthetic quote source.
//!
//! `RandomWalkSource` moves the last trade by a uniform step within ±1% on every
//! fetch and reports the change against a fixed previous close. It can be told to
//! fail periodically to exercise the analyzer's connection error path.
use quote_analyzer::QuoteSource;
use quote_common::Quote;
use quote_common::error::SourceFault;
use rand::Rng;

/// Lowest price the random walk may reach.
const MIN_PRICE: f64 = 0.01;

/// Random-walk quote feed for a single symbol.
pub struct RandomWalkSource {
    symbol: String,
    price: f64,
    close: f64,
    fail_every: Option<u64>,
    fetches: u64,
}

impl RandomWalkSource {
    /// Creates a feed starting at `start_price` with `close` as the previous close.
    pub fn new(symbol: &str, start_price: f64, close: f64) -> Self {
        RandomWalkSource {
            symbol: symbol.to_string(),
            price: start_price,
            close,
            fail_every: None,
            fetches: 0,
        }
    }

    /// Makes every `n`-th fetch fail. `0` disables failures.
    pub fn fail_every(mut self, n: u64) -> Self {
        self.fail_every = (n > 0).then_some(n);
        self
    }

    /// Calculate the next synthetic price using a small random walk around `current_price`.
    ///
    /// The step is sampled uniformly from `[-1%, +1%)` and the result is clamped to
    /// [`MIN_PRICE`].
    pub fn next_price(current_price: f64) -> f64 {
        let mut rng = rand::rng();
        let change: f64 = rng.random_range(-0.01..0.01);
        let new_price = current_price * (1.0 + change);
        new_price.max(MIN_PRICE)
    }
}

impl QuoteSource for RandomWalkSource {
    fn fetch_current_quote(&mut self) -> Result<Quote, SourceFault> {
        self.fetches += 1;
        if let Some(n) = self.fail_every {
            if self.fetches % n == 0 {
                return Err(format!("simulated feed outage on fetch #{}", self.fetches).into());
            }
        }

        self.price = Self::next_price(self.price);
        Ok(Quote::new(
            &self.symbol,
            self.price,
            self.close,
            self.price - self.close,
        ))
    }
}
