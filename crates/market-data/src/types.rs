// In crates/market-data/src/types.rs

use chrono::NaiveDate;
use core_types::{DailyBar, DailySeries, Ticker};
use serde::{Deserialize, Serialize};

/// Everything the screener needs to know about one ticker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerData {
    pub series: DailySeries,
    /// Raw sector identifier as reported by the source, e.g. "Technology".
    pub sector: Option<String>,
}

impl TickerData {
    pub fn new(series: DailySeries, sector: Option<String>) -> Self {
        Self { series, sector }
    }

    /// Builds ticker data from raw rows, dropping the ones that cannot be used.
    pub fn from_raw(ticker: &Ticker, raw: Vec<RawBar>, sector: Option<String>) -> Self {
        let total = raw.len();
        let bars: Vec<DailyBar> = raw.into_iter().filter_map(RawBar::into_bar).collect();
        if bars.len() < total {
            tracing::debug!(
                ticker = %ticker,
                dropped = total - bars.len(),
                kept = bars.len(),
                "Dropped incomplete daily rows."
            );
        }
        Self::new(DailySeries::new(bars), sector)
    }
}

/// A daily row as it appears in a source file. Any field but the date may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    pub date: NaiveDate,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

impl RawBar {
    /// Converts to a usable bar. Close and volume must be present, finite and non-negative.
    pub fn into_bar(self) -> Option<DailyBar> {
        let usable = |v: f64| v.is_finite() && v >= 0.0;
        let close = self.close.filter(|v| usable(*v))?;
        let volume = self.volume.filter(|v| usable(*v))?;
        Some(DailyBar {
            date: self.date,
            open: self.open.filter(|v| usable(*v)),
            high: self.high.filter(|v| usable(*v)),
            low: self.low.filter(|v| usable(*v)),
            close,
            volume,
        })
    }
}

/// On-disk layout of a single ticker's file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerFile {
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub bars: Vec<RawBar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(day: u32, close: Option<f64>, volume: Option<f64>) -> RawBar {
        RawBar {
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            open: None,
            high: None,
            low: None,
            close,
            volume,
        }
    }

    #[test]
    fn test_incomplete_rows_are_dropped() {
        let ticker = Ticker::new("AMD").unwrap();
        let data = TickerData::from_raw(
            &ticker,
            vec![
                raw(3, Some(10.0), Some(5.0)),
                raw(1, None, Some(5.0)),
                raw(2, Some(f64::NAN), Some(5.0)),
                raw(4, Some(11.0), Some(-1.0)),
                raw(5, Some(12.0), Some(0.0)),
            ],
            Some("Technology".into()),
        );
        assert_eq!(data.series.closes(), vec![10.0, 12.0]);
        assert_eq!(data.sector.as_deref(), Some("Technology"));
    }
}
