// In crates/indicators/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Invalid rolling window period: {0}")]
    InvalidPeriod(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
