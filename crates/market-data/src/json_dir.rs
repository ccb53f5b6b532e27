// In crates/market-data/src/json_dir.rs

use crate::{DataSource, Error, Result, TickerData, TickerFile};
use core_types::Ticker;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads one `<TICKER>.json` file per ticker from a directory.
///
/// ```json
/// { "sector": "Technology",
///   "bars": [ { "date": "2024-05-01", "open": 1.0, "high": 1.2, "low": 0.9,
///               "close": 1.1, "volume": 120000 } ] }
/// ```
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, ticker: &Ticker) -> PathBuf {
        self.dir.join(format!("{}.json", ticker.as_str()))
    }
}

impl DataSource for JsonDirSource {
    fn name(&self) -> &'static str {
        "json-dir"
    }

    fn fetch(&self, ticker: &Ticker) -> Result<TickerData> {
        let path = self.path_for(ticker);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(ticker = %ticker, path = %path.display(), "No market data file for ticker.");
                return Ok(TickerData::default());
            }
            Err(source) => return Err(Error::Io { path, source }),
        };

        let file: TickerFile =
            serde_json::from_str(&content).map_err(|source| Error::Json { path, source })?;
        Ok(TickerData::from_raw(ticker, file.bars, file.sector))
    }
}
