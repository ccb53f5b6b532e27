// In crates/screener/src/lib.rs

pub mod error;
pub mod ranking;
pub mod sector;
pub mod state;
pub mod types;

pub use error::{Error, Result};
pub use ranking::{Ranking, ScoredCandidate};
pub use sector::SectorLookup;
pub use state::{ScreenerState, TickerAnalysis};
pub use types::{ScreenerSettings, SectorSettings};

use core_types::Ticker;
use market_data::DataSource;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use scoring::ScoreBreakdown;
use std::time::Instant;

/// Runs the indicator and scoring pipeline over a fixed universe of tickers.
pub struct Screener {
    universe: Vec<Ticker>,
    min_history_rows: usize,
    min_score: u8,
    sectors: SectorLookup,
    pool: Option<ThreadPool>,
}

impl Screener {
    pub fn new(settings: &ScreenerSettings, sectors: SectorLookup) -> Result<Self> {
        let universe = settings
            .universe
            .iter()
            .map(|symbol| Ticker::new(symbol))
            .collect::<core_types::Result<Vec<_>>>()?;

        let pool = match settings.threads {
            Some(threads) => Some(ThreadPoolBuilder::new().num_threads(threads).build()?),
            None => None,
        };

        Ok(Self {
            universe,
            min_history_rows: settings.min_history_rows,
            min_score: settings.min_score,
            sectors,
            pool,
        })
    }

    /// Analyzes every ticker in the universe and stores the results in `state`.
    ///
    /// Tickers are processed in parallel. `state` is only touched once every
    /// ticker has been analyzed, so a data-source error leaves it as it was.
    pub fn run<'s>(
        &self,
        source: &dyn DataSource,
        state: &'s mut ScreenerState,
    ) -> Result<&'s Ranking> {
        let start_time = Instant::now();
        tracing::info!(
            tickers = self.universe.len(),
            source = source.name(),
            "Starting screener run."
        );

        let work = || {
            self.universe
                .par_iter()
                .map(|ticker| self.analyze(ticker, source))
                .collect::<Result<Vec<_>>>()
        };
        let outcomes = match &self.pool {
            Some(pool) => pool.install(work)?,
            None => work()?,
        };

        let analyses: Vec<TickerAnalysis> = outcomes.into_iter().flatten().collect();
        let ranking = Ranking::new(analyses.iter().map(TickerAnalysis::candidate), self.min_score);

        tracing::info!(
            analyzed = analyses.len(),
            skipped = self.universe.len() - analyses.len(),
            ranked = ranking.len(),
            duration = ?start_time.elapsed(),
            "Screener run finished."
        );

        Ok(state.apply(analyses, ranking))
    }

    /// Analyzes one ticker. `None` means it lacked enough history to be considered.
    fn analyze(&self, ticker: &Ticker, source: &dyn DataSource) -> Result<Option<TickerAnalysis>> {
        let data = source.fetch(ticker)?;

        if data.series.is_empty() || data.series.len() < self.min_history_rows {
            tracing::debug!(
                ticker = %ticker,
                rows = data.series.len(),
                required = self.min_history_rows,
                "Skipping ticker with insufficient history."
            );
            return Ok(None);
        }

        let snapshot = indicators::compute(&data.series)?;
        let breakdown = ScoreBreakdown::evaluate(&snapshot);
        tracing::debug!(ticker = %ticker, score = breakdown.total(), ?breakdown, "Scored ticker.");

        Ok(Some(TickerAnalysis {
            ticker: ticker.clone(),
            sector: self.sectors.label(data.sector.as_deref()),
            series: data.series,
            indicators: snapshot,
            breakdown,
        }))
    }
}
