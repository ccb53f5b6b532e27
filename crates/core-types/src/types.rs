// In crates/core-types/src/types.rs

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stock ticker symbol, e.g. "NVDA".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticker(pub String);

impl Ticker {
    /// Creates a ticker, trimming surrounding whitespace and upper-casing it.
    ///
    /// Symbols may only contain ASCII letters, digits, `.` and `-`, and must
    /// contain at least one letter or digit (e.g. "BRK.B", "BF-B").
    pub fn new(symbol: &str) -> Result<Self> {
        let symbol = symbol.trim();
        let allowed = |c: char| c.is_ascii_alphanumeric() || c == '.' || c == '-';
        if !symbol.chars().all(allowed) || !symbol.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidTicker(symbol.to_string()));
        }
        Ok(Self(symbol.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One trading day for one instrument.
///
/// Only `close` and `volume` take part in indicator math; the other prices are
/// carried along for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: f64,
}

impl DailyBar {
    pub fn new(date: NaiveDate, close: f64, volume: f64) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close,
            volume,
        }
    }
}

/// A date-ordered daily price/volume history for one instrument.
///
/// Rows are sorted by date on construction, so every rolling computation can
/// rely on chronological order. Gaps between dates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    bars: Vec<DailyBar>,
}

impl DailySeries {
    pub fn new(mut bars: Vec<DailyBar>) -> Self {
        // Stable, so same-date rows keep their source order.
        bars.sort_by_key(|bar| bar.date);
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.volume).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|bar| bar.date).collect()
    }

    pub fn last(&self) -> Option<&DailyBar> {
        self.bars.last()
    }

    pub fn latest_close(&self) -> Option<f64> {
        self.last().map(|bar| bar.close)
    }
}

impl From<Vec<DailyBar>> for DailySeries {
    fn from(bars: Vec<DailyBar>) -> Self {
        Self::new(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_ticker_is_normalized() {
        assert_eq!(Ticker::new(" pltr ").unwrap(), Ticker("PLTR".to_string()));
    }

    #[test]
    fn test_ticker_rejects_blank_and_embedded_space() {
        assert!(matches!(Ticker::new("   "), Err(Error::InvalidTicker(_))));
        assert!(matches!(Ticker::new("BR K"), Err(Error::InvalidTicker(_))));
    }

    #[test]
    fn test_ticker_rejects_path_characters() {
        for symbol in ["../x", "a/b", "a\\b", "..", "."] {
            assert!(matches!(Ticker::new(symbol), Err(Error::InvalidTicker(_))), "{symbol}");
        }
        assert_eq!(Ticker::new("brk.b").unwrap().as_str(), "BRK.B");
        assert_eq!(Ticker::new("BF-B").unwrap().as_str(), "BF-B");
    }

    #[test]
    fn test_series_is_sorted_by_date() {
        let series = DailySeries::new(vec![
            DailyBar::new(day(5), 12.0, 100.0),
            DailyBar::new(day(1), 10.0, 100.0),
            DailyBar::new(day(3), 11.0, 100.0),
        ]);
        assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
        assert_eq!(series.dates(), vec![day(1), day(3), day(5)]);
        assert_eq!(series.latest_close(), Some(12.0));
    }

    #[test]
    fn test_empty_series() {
        let series = DailySeries::default();
        assert!(series.is_empty());
        assert_eq!(series.latest_close(), None);
    }
}
