// In crates/screener/src/state.rs

use crate::ranking::{Ranking, ScoredCandidate};
use core_types::{DailySeries, Ticker};
use indicators::IndicatorSnapshot;
use risk::{LevelSettings, TradeLevels};
use scoring::ScoreBreakdown;
use std::collections::HashMap;

/// The full result of analyzing one ticker, kept for later lookup.
#[derive(Debug, Clone)]
pub struct TickerAnalysis {
    pub ticker: Ticker,
    pub sector: String,
    pub series: DailySeries,
    pub indicators: IndicatorSnapshot,
    pub breakdown: ScoreBreakdown,
}

impl TickerAnalysis {
    pub fn score(&self) -> u8 {
        self.breakdown.total()
    }

    pub fn latest_close(&self) -> Option<f64> {
        self.series.latest_close()
    }

    /// Take-profit and stop-loss around the latest close.
    pub fn levels(&self, settings: &LevelSettings) -> risk::Result<TradeLevels> {
        let close = self.latest_close().ok_or_else(|| {
            risk::Error::InvalidParameters(format!("{} has no closing price", self.ticker))
        })?;
        TradeLevels::from_close(close, settings)
    }

    pub fn candidate(&self) -> ScoredCandidate {
        let latest = self.indicators.latest().unwrap_or_default();
        ScoredCandidate {
            ticker: self.ticker.clone(),
            sector: self.sector.clone(),
            score: self.score(),
            rsi: latest.rsi14,
            return_5d: latest.return_5d,
        }
    }
}

/// Analysis state owned by the caller across runs.
///
/// Each run replaces the ranking as a whole and replaces cached analyses per
/// ticker. Analyses of tickers not seen in the latest run are kept.
#[derive(Debug, Clone, Default)]
pub struct ScreenerState {
    ranking: Option<Ranking>,
    analyses: HashMap<Ticker, TickerAnalysis>,
}

impl ScreenerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranking of the latest run, if any run has completed.
    pub fn ranking(&self) -> Option<&Ranking> {
        self.ranking.as_ref()
    }

    pub fn analysis(&self, ticker: &Ticker) -> Option<&TickerAnalysis> {
        self.analyses.get(ticker)
    }

    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.analyses.contains_key(ticker)
    }

    /// Number of cached analyses.
    pub fn cached(&self) -> usize {
        self.analyses.len()
    }

    pub(crate) fn apply(&mut self, analyses: Vec<TickerAnalysis>, ranking: Ranking) -> &Ranking {
        for analysis in analyses {
            self.analyses.insert(analysis.ticker.clone(), analysis);
        }
        self.ranking.insert(ranking)
    }
}
