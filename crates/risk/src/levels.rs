// In crates/risk/src/levels.rs

use crate::types::LevelSettings;
use crate::{Error, Result};
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Exit levels derived from the latest close.
///
/// These are presentation values only; nothing is persisted or ordered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradeLevels {
    pub entry: Decimal,
    pub take_profit: Decimal,
    pub stop_loss: Decimal,
}

impl TradeLevels {
    /// Builds the levels for an entry at `close`.
    pub fn from_close(close: f64, settings: &LevelSettings) -> Result<Self> {
        if !close.is_finite() || close < 0.0 {
            return Err(Error::InvalidParameters(format!(
                "entry price must be non-negative, got {close}"
            )));
        }
        let entry = to_decimal(close, "entry price")?;
        let take_profit = percent(settings.take_profit_percent, "take_profit_percent")?;
        let stop_loss = percent(settings.stop_loss_percent, "stop_loss_percent")?;
        if stop_loss >= dec!(1) {
            return Err(Error::InvalidParameters(format!(
                "stop_loss_percent must be below 1, got {}",
                settings.stop_loss_percent
            )));
        }

        Ok(Self {
            entry,
            take_profit: entry * (dec!(1) + take_profit),
            stop_loss: entry * (dec!(1) - stop_loss),
        })
    }

    pub fn take_profit_f64(&self) -> f64 {
        self.take_profit.to_f64().unwrap_or(f64::NAN)
    }

    pub fn stop_loss_f64(&self) -> f64 {
        self.stop_loss.to_f64().unwrap_or(f64::NAN)
    }
}

fn percent(value: f64, name: &str) -> Result<Decimal> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidParameters(format!(
            "{name} must be a non-negative fraction, got {value}"
        )));
    }
    to_decimal(value, name)
}

fn to_decimal(value: f64, name: &str) -> Result<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| Error::InvalidParameters(format!("{name} is not representable: {value}")))
}
