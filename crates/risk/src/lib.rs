// In crates/risk/src/lib.rs

pub mod error;
pub mod levels;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use levels::TradeLevels;
pub use types::LevelSettings;
