//! Ticker symbols and the symbol validation capability.
//!
//! `Ticker` is the bounded allow-list of recognized symbols. Analyzers never look
//! it up directly; they consult a [`SymbolValidator`], whose default
//! implementation [`KnownTickers`] is backed by this list. Tests and callers with
//! their own universe of symbols can pass a closure or a `HashSet<String>`.
use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Predicate deciding whether a ticker symbol may be analyzed.
pub trait SymbolValidator {
    /// Returns `true` if `symbol` is a recognized ticker.
    fn is_valid_symbol(&self, symbol: &str) -> bool;
}

/// Default validator backed by the [`Ticker`] allow-list.
///
/// Matching is exact: `"F"` is recognized, `"f"` is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownTickers;

impl SymbolValidator for KnownTickers {
    fn is_valid_symbol(&self, symbol: &str) -> bool {
        Ticker::from_str(symbol).is_ok()
    }
}

impl<F> SymbolValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_symbol(&self, symbol: &str) -> bool {
        self(symbol)
    }
}

impl SymbolValidator for HashSet<String> {
    fn is_valid_symbol(&self, symbol: &str) -> bool {
        self.contains(symbol)
    }
}

/// Set of recognized ticker symbols.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
pub enum Ticker {
    AAPL,
    MSFT,
    GOOGL,
    AMZN,
    NVDA,
    META,
    TSLA,
    JPM,
    JNJ,
    V,
    PG,
    UNH,
    HD,
    DIS,
    PYPL,
    NFLX,
    ADBE,
    CRM,
    INTC,
    CSCO,
    PFE,
    ABT,
    KO,
    PEP,
    COST,
    ORCL,
    IBM,
    T,
    VZ,
    GE,
    GM,
    F,
    BA,
    CAT,
    GS,
    MS,
    C,
    BAC,
    WFC,
    AXP,
    MCD,
    SBUX,
    NKE,
    WMT,
    TGT,
    XOM,
    CVX,
    MMM,
    MO,
    LMT,
}
