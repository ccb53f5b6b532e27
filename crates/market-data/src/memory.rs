// In crates/market-data/src/memory.rs

use crate::{DataSource, Result, TickerData};
use core_types::Ticker;
use std::collections::HashMap;

/// A source backed by a map, for tests and for callers that fetch elsewhere.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    data: HashMap<Ticker, TickerData>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the data for `ticker`.
    pub fn insert(&mut self, ticker: Ticker, data: TickerData) {
        self.data.insert(ticker, data);
    }

    pub fn with(mut self, ticker: Ticker, data: TickerData) -> Self {
        self.insert(ticker, data);
        self
    }
}

impl DataSource for InMemorySource {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    fn fetch(&self, ticker: &Ticker) -> Result<TickerData> {
        Ok(self.data.get(ticker).cloned().unwrap_or_default())
    }
}
