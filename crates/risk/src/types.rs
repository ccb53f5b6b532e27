// In crates/risk/src/types.rs

use serde::{Deserialize, Serialize};

/// Distances of the exit levels from the entry price, as fractions (0.05 = 5%).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LevelSettings {
    #[serde(default = "default_percent")]
    pub take_profit_percent: f64,
    #[serde(default = "default_percent")]
    pub stop_loss_percent: f64,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            take_profit_percent: default_percent(),
            stop_loss_percent: default_percent(),
        }
    }
}

fn default_percent() -> f64 {
    0.05
}
