// In crates/core-types/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Invalid ticker symbol: {0:?}")]
    InvalidTicker(String),
}

pub type Result<T> = std::result::Result<T, Error>;
