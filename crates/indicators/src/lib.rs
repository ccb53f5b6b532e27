// In crates/indicators/src/lib.rs

pub mod error;
pub mod rolling;
pub mod snapshot;

pub use error::{Error, Result};
pub use snapshot::{IndicatorSnapshot, LatestIndicators, compute};

/// Window of the short close-price moving average.
pub const FAST_SMA_PERIOD: usize = 5;
/// Window of the long close-price moving average.
pub const SLOW_SMA_PERIOD: usize = 20;
pub const RSI_PERIOD: usize = 14;
pub const VOLUME_FAST_PERIOD: usize = 5;
pub const VOLUME_SLOW_PERIOD: usize = 20;
/// Lookback, in rows, of the short-term return.
pub const RETURN_LAG: usize = 5;
