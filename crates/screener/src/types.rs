// In crates/screener/src/types.rs

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Debug, Clone)]
pub struct ScreenerSettings {
    /// Tickers analyzed on every run, in ranking tie-break order.
    pub universe: Vec<String>,
    /// Tickers with fewer usable rows are skipped entirely.
    #[serde(default = "default_min_history_rows")]
    pub min_history_rows: usize,
    /// Lowest score that still makes the ranking.
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    /// Size of a dedicated worker pool; the global rayon pool when unset.
    #[serde(default)]
    pub threads: Option<usize>,
}

impl ScreenerSettings {
    pub fn with_universe<S: AsRef<str>>(universe: &[S]) -> Self {
        Self {
            universe: universe.iter().map(|s| s.as_ref().to_string()).collect(),
            min_history_rows: default_min_history_rows(),
            min_score: default_min_score(),
            threads: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SectorSettings {
    #[serde(default = "default_unknown_label")]
    pub unknown_label: String,
    /// Raw sector identifier to display label.
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl Default for SectorSettings {
    fn default() -> Self {
        Self {
            unknown_label: default_unknown_label(),
            labels: HashMap::new(),
        }
    }
}

/// Helper functions for serde defaults
fn default_min_history_rows() -> usize { 30 }
fn default_min_score() -> u8 { 4 }
fn default_unknown_label() -> String { "Unknown".to_string() }
