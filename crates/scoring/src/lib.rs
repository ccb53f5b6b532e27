// In crates/scoring/src/lib.rs

pub mod classify;
pub mod rules;

pub use classify::{Tier, Verdict, tier_for_score, verdict_for_score};
pub use rules::{MAX_SCORE, MIN_SCORING_ROWS, ScoreBreakdown, score};
