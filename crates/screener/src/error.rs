// In crates/screener/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid universe entry: {0}")]
    Universe(#[from] core_types::Error),

    #[error("Market data error: {0}")]
    Data(#[from] market_data::Error),

    #[error("Indicator computation failed: {0}")]
    Indicators(#[from] indicators::Error),

    #[error("Failed to build the screener thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
