// In crates/market-data/src/lib.rs

use core_types::Ticker;

pub mod error;
pub mod json_dir;
pub mod memory;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use json_dir::JsonDirSource;
pub use memory::InMemorySource;
pub use types::{RawBar, TickerData, TickerFile};

/// Supplies daily history and sector information per ticker.
///
/// A ticker the source knows nothing about yields empty `TickerData`, not an
/// error. Errors are reserved for data that exists but cannot be read.
pub trait DataSource: Send + Sync {
    /// The name of the source, for logging.
    fn name(&self) -> &'static str;

    fn fetch(&self, ticker: &Ticker) -> Result<TickerData>;
}
