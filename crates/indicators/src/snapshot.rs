// In crates/indicators/src/snapshot.rs

use crate::rolling::{pct_change, rsi, sma};
use crate::{
    FAST_SMA_PERIOD, RETURN_LAG, RSI_PERIOD, Result, SLOW_SMA_PERIOD, VOLUME_FAST_PERIOD,
    VOLUME_SLOW_PERIOD,
};
use core_types::DailySeries;
use serde::Serialize;

/// Derived indicator series for one instrument.
///
/// Every sequence has the same length as the source series and is aligned with
/// it by position. `None` marks rows where the indicator's window is not yet
/// satisfied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorSnapshot {
    pub sma5: Vec<Option<f64>>,
    pub sma20: Vec<Option<f64>>,
    pub rsi14: Vec<Option<f64>>,
    pub volume_ma5: Vec<Option<f64>>,
    pub volume_ma20: Vec<Option<f64>>,
    pub return_5d: Vec<Option<f64>>,
}

/// Indicator values of a single row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LatestIndicators {
    pub sma5: Option<f64>,
    pub sma20: Option<f64>,
    pub rsi14: Option<f64>,
    pub volume_ma5: Option<f64>,
    pub volume_ma20: Option<f64>,
    pub return_5d: Option<f64>,
}

impl IndicatorSnapshot {
    /// Number of rows, equal to the length of the series it was computed from.
    pub fn len(&self) -> usize {
        self.sma5.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sma5.is_empty()
    }

    /// Values at row `index`, or `None` if the row does not exist.
    pub fn row(&self, index: usize) -> Option<LatestIndicators> {
        if index >= self.len() {
            return None;
        }
        let at = |series: &[Option<f64>]| series.get(index).copied().flatten();
        Some(LatestIndicators {
            sma5: at(&self.sma5),
            sma20: at(&self.sma20),
            rsi14: at(&self.rsi14),
            volume_ma5: at(&self.volume_ma5),
            volume_ma20: at(&self.volume_ma20),
            return_5d: at(&self.return_5d),
        })
    }

    /// Values of the most recent row.
    pub fn latest(&self) -> Option<LatestIndicators> {
        self.len().checked_sub(1).and_then(|i| self.row(i))
    }
}

/// Computes the full indicator set from a daily series.
///
/// Short input is not an error: indicators whose window is not satisfied are
/// simply absent.
pub fn compute(series: &DailySeries) -> Result<IndicatorSnapshot> {
    let closes = series.closes();
    let volumes = series.volumes();

    Ok(IndicatorSnapshot {
        sma5: sma(&closes, FAST_SMA_PERIOD)?,
        sma20: sma(&closes, SLOW_SMA_PERIOD)?,
        rsi14: rsi(&closes, RSI_PERIOD)?,
        volume_ma5: sma(&volumes, VOLUME_FAST_PERIOD)?,
        volume_ma20: sma(&volumes, VOLUME_SLOW_PERIOD)?,
        return_5d: pct_change(&closes, RETURN_LAG),
    })
}
