// In app/src/report.rs

use anyhow::Result;
use itertools::Itertools;
use risk::LevelSettings;
use scoring::{Tier, Verdict, tier_for_score, verdict_for_score};
use screener::{Ranking, TickerAnalysis};
use serde::Serialize;

/// One ranking line as exposed to JSON consumers.
#[derive(Debug, Serialize)]
struct RankedRow<'a> {
    rank: usize,
    ticker: &'a str,
    sector: &'a str,
    score: u8,
    rsi: Option<f64>,
    return_5d: Option<f64>,
    tier: Tier,
    verdict: Verdict,
}

fn rows(ranking: &Ranking) -> Vec<RankedRow<'_>> {
    ranking
        .iter()
        .enumerate()
        .map(|(i, c)| RankedRow {
            rank: i + 1,
            ticker: c.ticker.as_str(),
            sector: &c.sector,
            score: c.score,
            rsi: c.rsi.map(round1),
            return_5d: c.return_5d.map(round1),
            tier: c.tier(),
            verdict: c.verdict(),
        })
        .collect()
}

pub fn ranking_json(ranking: &Ranking) -> Result<String> {
    Ok(serde_json::to_string_pretty(&rows(ranking))?)
}

/// Prints the ranking as a table, best candidate first.
pub fn print_ranking(ranking: &Ranking) {
    println!("\n--- Rebound Candidates ---");
    if ranking.is_empty() {
        println!("No ticker reached the minimum score.");
        return;
    }
    println!(
        "{:>4}  {:<6}  {:<16}  {:>5}  {:>6}  {:>8}  {}",
        "Rank", "Ticker", "Sector", "Score", "RSI", "5d (%)", "Tier"
    );
    for row in rows(ranking) {
        println!(
            "{:>4}  {:<6}  {:<16}  {:>5}  {:>6}  {:>8}  {}",
            row.rank,
            row.ticker,
            row.sector,
            row.score,
            fmt_opt(row.rsi),
            fmt_opt(row.return_5d),
            row.tier
        );
    }
}

/// Prints one ticker's levels, score breakdown and most recent indicator rows.
pub fn print_detail(analysis: &TickerAnalysis, level_settings: &LevelSettings, last_rows: usize) -> Result<()> {
    let score = analysis.score();
    let tier = tier_for_score(score);
    let levels = analysis.levels(level_settings)?;
    let breakdown = analysis.breakdown;

    println!("\n=== {} ({}) ===", analysis.ticker, analysis.sector);
    if let Some(last) = analysis.series.last() {
        println!("Entry (latest close {}): {:.2}", last.date, levels.entry);
    }
    println!(
        "Take profit (+{:.0}%): {:.2} | Stop loss (-{:.0}%): {:.2}",
        level_settings.take_profit_percent * 100.0,
        levels.take_profit,
        level_settings.stop_loss_percent * 100.0,
        levels.stop_loss
    );
    let parts = [
        ("rsi", breakdown.rsi),
        ("return", breakdown.return_5d),
        ("volume", breakdown.volume),
        ("trend", breakdown.trend),
    ]
    .iter()
    .map(|(name, points)| format!("{name} +{points}"))
    .join(", ");
    println!("Score: {score} [{parts}]");
    println!("Tier: {tier} ({})", tier.color());
    println!("Verdict: {}", verdict_for_score(score));

    println!(
        "\n{:<10}  {:>9}  {:>9}  {:>9}  {:>6}  {:>12}  {:>12}  {:>7}",
        "Date", "Close", "SMA5", "SMA20", "RSI14", "Vol MA5", "Vol MA20", "5d (%)"
    );
    let bars = analysis.series.bars();
    let start = bars.len().saturating_sub(last_rows);
    for (i, bar) in bars.iter().enumerate().skip(start) {
        let Some(row) = analysis.indicators.row(i) else {
            continue;
        };
        println!(
            "{:<10}  {:>9.2}  {:>9}  {:>9}  {:>6}  {:>12}  {:>12}  {:>7}",
            bar.date.to_string(),
            bar.close,
            fmt_opt2(row.sma5),
            fmt_opt2(row.sma20),
            fmt_opt(row.rsi14),
            fmt_opt0(row.volume_ma5),
            fmt_opt0(row.volume_ma20),
            fmt_opt(row.return_5d)
        );
    }
    Ok(())
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

fn fmt_opt2(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn fmt_opt0(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.0}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Ticker;
    use screener::ScoredCandidate;

    fn ranking() -> Ranking {
        let candidate = |symbol: &str, score: u8, rsi: Option<f64>| ScoredCandidate {
            ticker: Ticker::new(symbol).unwrap(),
            sector: "Unknown".to_string(),
            score,
            rsi,
            return_5d: Some(-8.456),
        };
        Ranking::new(
            vec![candidate("AMD", 5, Some(33.333)), candidate("NVDA", 10, None)],
            4,
        )
    }

    #[test]
    fn test_rows_are_ranked_and_rounded() {
        let ranking = ranking();
        let rows = rows(&ranking);
        assert_eq!(rows[0].ticker, "NVDA");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].tier, Tier::Strong);
        assert_eq!(rows[1].rsi, Some(33.3));
        assert_eq!(rows[1].return_5d, Some(-8.5));
        assert_eq!(rows[1].verdict, Verdict::WaitAndSee);
    }

    #[test]
    fn test_ranking_json() {
        let json: serde_json::Value = serde_json::from_str(&ranking_json(&ranking()).unwrap()).unwrap();
        assert_eq!(json[0]["ticker"], "NVDA");
        assert_eq!(json[0]["tier"], "strong");
        assert_eq!(json[0]["verdict"], "favorable");
        assert!(json[0]["rsi"].is_null());
        assert_eq!(json[1]["verdict"], "wait_and_see");
    }

    #[test]
    fn test_optional_formatting() {
        assert_eq!(fmt_opt(None), "-");
        assert_eq!(fmt_opt(Some(4.03)), "4.0");
        assert_eq!(fmt_opt2(Some(119.5)), "119.50");
        assert_eq!(fmt_opt0(Some(1500.4)), "1500");
    }
}
