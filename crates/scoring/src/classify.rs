// In crates/scoring/src/classify.rs

use serde::Serialize;
use std::fmt;

/// Display/alert tier of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Strong,
    Moderate,
    Neutral,
}

impl Tier {
    /// Chart line color for the tier.
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Strong => "darkgreen",
            Tier::Moderate => "green",
            Tier::Neutral => "gray",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Strong => "strong",
            Tier::Moderate => "moderate",
            Tier::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing recommendation for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Favorable,
    WaitAndSee,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Favorable => "favorable rebound candidate",
            Verdict::WaitAndSee => "wait and see",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// Tier and verdict use different cut points and are kept apart on purpose.

pub fn tier_for_score(score: u8) -> Tier {
    if score >= 9 {
        Tier::Strong
    } else if score >= 6 {
        Tier::Moderate
    } else {
        Tier::Neutral
    }
}

pub fn verdict_for_score(score: u8) -> Verdict {
    if score >= 7 {
        Verdict::Favorable
    } else {
        Verdict::WaitAndSee
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_SCORE;

    #[test]
    fn test_tier_partition() {
        for score in 0..=MAX_SCORE {
            let expected = match score {
                0..=5 => Tier::Neutral,
                6..=8 => Tier::Moderate,
                _ => Tier::Strong,
            };
            assert_eq!(tier_for_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn test_verdict_threshold_differs_from_tier() {
        assert_eq!(tier_for_score(6), Tier::Moderate);
        assert_eq!(verdict_for_score(6), Verdict::WaitAndSee);
        assert_eq!(verdict_for_score(7), Verdict::Favorable);
        assert_eq!(tier_for_score(8), Tier::Moderate);
        assert_eq!(verdict_for_score(11), Verdict::Favorable);
        assert_eq!(verdict_for_score(0), Verdict::WaitAndSee);
    }

    #[test]
    fn test_tier_colors_and_messages() {
        assert_eq!(tier_for_score(11).color(), "darkgreen");
        assert_eq!(tier_for_score(7).color(), "green");
        assert_eq!(tier_for_score(3).color(), "gray");
        assert_eq!(Verdict::Favorable.to_string(), "favorable rebound candidate");
        assert_eq!(Verdict::WaitAndSee.to_string(), "wait and see");
    }
}
