// In app/src/main.rs

use anyhow::Result;
use app_config::Settings;
use clap::{Parser, Subcommand};
use core_types::Ticker;
use market_data::JsonDirSource;
use screener::{Screener, ScreenerState, SectorLookup};
use std::time::Instant;
use tokio::task;
use tracing_subscriber::prelude::*;
mod report;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A short-term rebound screener for a fixed stock universe.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyzes the configured universe and prints the rebound ranking.
    Rank {
        /// Print the ranking as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Analyzes the configured universe and prints the details of one ticker.
    Show {
        /// The ticker to show (e.g., "NVDA").
        #[arg(short, long)]
        ticker: String,

        /// How many of the most recent indicator rows to print.
        #[arg(short, long, default_value_t = 10)]
        rows: usize,
    },
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings()?;
    init_tracing(&settings.app.log_level);

    tracing::info!(environment = %settings.app.environment, "Starting rebound screener");

    let state = run_analysis(&settings).await?;

    match cli.command {
        Commands::Rank { json } => {
            let Some(ranking) = state.ranking() else {
                anyhow::bail!("The analysis produced no ranking.");
            };
            if json {
                println!("{}", report::ranking_json(ranking)?);
            } else {
                report::print_ranking(ranking);
            }
        }
        Commands::Show { ticker, rows } => {
            let ticker = Ticker::new(&ticker)?;
            match state.analysis(&ticker) {
                Some(analysis) => report::print_detail(analysis, &settings.levels, rows)?,
                None => println!(
                    "{ticker}: no analysis available (not in the universe or fewer than {} days of history).",
                    settings.screener.min_history_rows
                ),
            }
        }
    }

    tracing::info!("Rebound screener has finished successfully.");

    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = log_level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();
}

/// Runs one screener pass over the configured universe.
async fn run_analysis(settings: &Settings) -> Result<ScreenerState> {
    let start_time = Instant::now();
    let screener = Screener::new(&settings.screener, SectorLookup::new(&settings.sectors))?;
    let source = JsonDirSource::new(&settings.data.dir);
    tracing::info!(dir = %source.dir().display(), "Reading market data.");

    // The per-ticker work is CPU-bound and parallel, so keep it off the async runtime.
    let state = task::spawn_blocking(move || -> screener::Result<ScreenerState> {
        let mut state = ScreenerState::new();
        screener.run(&source, &mut state)?;
        Ok(state)
    })
    .await??;

    tracing::info!(duration = ?start_time.elapsed(), cached = state.cached(), "Analysis finished.");
    Ok(state)
}
