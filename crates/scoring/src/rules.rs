// In crates/scoring/src/rules.rs

use indicators::IndicatorSnapshot;
use serde::Serialize;

/// Fewer rows than this and the snapshot is scored 0 without evaluating rules.
pub const MIN_SCORING_ROWS: usize = 20;
/// Highest score the rules can add up to.
pub const MAX_SCORE: u8 = 11;

/// The points each rule contributed to a score.
///
/// Rules are independent: every rule is evaluated against the latest row and
/// adds its own points regardless of the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub rsi: u8,
    pub return_5d: u8,
    pub volume: u8,
    pub trend: u8,
}

impl ScoreBreakdown {
    /// Evaluates every rule against the most recent row of `snapshot`.
    pub fn evaluate(snapshot: &IndicatorSnapshot) -> Self {
        let len = snapshot.len();
        if len < MIN_SCORING_ROWS {
            return Self::default();
        }
        let Some(latest) = snapshot.latest() else {
            return Self::default();
        };

        let trend_base = len
            .checked_sub(3)
            .and_then(|i| snapshot.sma20.get(i).copied().flatten());

        Self {
            rsi: rsi_points(latest.rsi14),
            return_5d: return_points(latest.return_5d),
            volume: volume_points(latest.volume_ma5, latest.volume_ma20),
            trend: trend_points(latest.sma20, trend_base),
        }
    }

    pub fn total(&self) -> u8 {
        self.rsi + self.return_5d + self.volume + self.trend
    }
}

/// Rebound score of an instrument, in `0..=MAX_SCORE`.
pub fn score(snapshot: &IndicatorSnapshot) -> u8 {
    ScoreBreakdown::evaluate(snapshot).total()
}

/// Oversold momentum: the lower the RSI, the more points.
pub fn rsi_points(rsi: Option<f64>) -> u8 {
    match rsi {
        Some(r) if r < 25.0 => 5,
        Some(r) if r < 35.0 => 4,
        Some(r) if r < 45.0 => 2,
        _ => 0,
    }
}

/// Recent drawdown: the deeper the 5-day drop, the more points.
pub fn return_points(return_5d: Option<f64>) -> u8 {
    match return_5d {
        Some(r) if r <= -8.0 => 3,
        Some(r) if r <= -4.0 => 2,
        Some(r) if r <= -2.0 => 1,
        _ => 0,
    }
}

/// Short-term volume running above its longer average.
pub fn volume_points(volume_ma5: Option<f64>, volume_ma20: Option<f64>) -> u8 {
    match (volume_ma5, volume_ma20) {
        (Some(fast), Some(slow)) if fast > slow => 2,
        _ => 0,
    }
}

/// The long moving average has not fallen over the last rows.
pub fn trend_points(sma20_latest: Option<f64>, sma20_base: Option<f64>) -> u8 {
    match (sma20_latest, sma20_base) {
        (Some(latest), Some(base)) if latest >= base => 1,
        _ => 0,
    }
}
