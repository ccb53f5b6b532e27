// In crates/screener/src/ranking.rs

use core_types::Ticker;
use scoring::{Tier, Verdict, tier_for_score, verdict_for_score};
use serde::Serialize;

/// A ticker that made it through one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub ticker: Ticker,
    pub sector: String,
    pub score: u8,
    pub rsi: Option<f64>,
    pub return_5d: Option<f64>,
}

impl ScoredCandidate {
    pub fn tier(&self) -> Tier {
        tier_for_score(self.score)
    }

    pub fn verdict(&self) -> Verdict {
        verdict_for_score(self.score)
    }
}

/// Candidates at or above the minimum score, best first.
///
/// Equal scores keep the order in which the candidates were supplied, which is
/// the universe order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ranking {
    candidates: Vec<ScoredCandidate>,
}

impl Ranking {
    pub fn new(candidates: impl IntoIterator<Item = ScoredCandidate>, min_score: u8) -> Self {
        let mut candidates: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|c| c.score >= min_score)
            .collect();
        // `sort_by` is stable.
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCandidate> {
        self.candidates.iter()
    }

    pub fn get(&self, ticker: &Ticker) -> Option<&ScoredCandidate> {
        self.candidates.iter().find(|c| &c.ticker == ticker)
    }

    pub fn top(&self) -> Option<&ScoredCandidate> {
        self.candidates.first()
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a ScoredCandidate;
    type IntoIter = std::slice::Iter<'a, ScoredCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(symbol: &str, score: u8) -> ScoredCandidate {
        ScoredCandidate {
            ticker: Ticker::new(symbol).unwrap(),
            sector: "Unknown".to_string(),
            score,
            rsi: None,
            return_5d: None,
        }
    }

    fn symbols(ranking: &Ranking) -> Vec<&str> {
        ranking.iter().map(|c| c.ticker.as_str()).collect()
    }

    #[test]
    fn test_sorted_descending_and_filtered() {
        let ranking = Ranking::new(
            vec![
                candidate("A", 4),
                candidate("B", 3),
                candidate("C", 9),
                candidate("D", 0),
                candidate("E", 6),
            ],
            4,
        );
        assert_eq!(symbols(&ranking), vec!["C", "E", "A"]);
        assert!(ranking.iter().all(|c| c.score >= 4));
        assert!(ranking.get(&Ticker::new("B").unwrap()).is_none());
        assert_eq!(ranking.top().map(|c| c.score), Some(9));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranking = Ranking::new(
            vec![
                candidate("X", 5),
                candidate("Y", 7),
                candidate("Z", 5),
                candidate("W", 7),
            ],
            4,
        );
        assert_eq!(symbols(&ranking), vec!["Y", "W", "X", "Z"]);
    }

    #[test]
    fn test_candidate_classification() {
        let c = candidate("A", 7);
        assert_eq!(c.tier(), Tier::Moderate);
        assert_eq!(c.verdict(), Verdict::Favorable);
    }
}
