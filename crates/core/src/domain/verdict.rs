use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RubricCriterion {
    /// Key used in `detailedScores`.
    pub key: &'static str,
    pub label: &'static str,
    pub max_points: u8,
}

pub const SCORE_RUBRIC: [RubricCriterion; 8] = [
    RubricCriterion { key: "Performance", label: "Performance", max_points: 15 },
    RubricCriterion { key: "Safety", label: "Safety", max_points: 20 },
    RubricCriterion { key: "Comfort", label: "Comfort", max_points: 15 },
    RubricCriterion { key: "Tech", label: "Technology", max_points: 10 },
    RubricCriterion { key: "Value", label: "Value", max_points: 15 },
    RubricCriterion { key: "Fuel", label: "Fuel Economy", max_points: 10 },
    RubricCriterion { key: "MarketFit", label: "Market Fit", max_points: 10 },
    RubricCriterion { key: "ClientMatch", label: "Client Match", max_points: 5 },
];

pub const MAX_TOTAL_SCORE: u8 = 100;

/// Winning car name used when arbitration produced nothing usable.
pub const SENTINEL_WINNER: &str = "Error";

pub fn rubric_total() -> u32 {
    SCORE_RUBRIC.iter().map(|criterion| u32::from(criterion.max_points)).sum()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Verdict {
    pub winning_car: String,
    pub winning_car_price: String,
    pub final_verdict: String,
    pub total_score: u8,
    pub detailed_scores: BTreeMap<String, u32>,
    pub key_strengths: Vec<String>,
    pub reasoning: String,
    pub runner_ups: Vec<String>,
}

impl Verdict {
    pub fn sentinel(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            winning_car: SENTINEL_WINNER.to_string(),
            final_verdict: reason.clone(),
            reasoning: reason,
            ..Self::default()
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.winning_car == SENTINEL_WINNER
    }
}

#[cfg(test)]
mod tests {
    use super::{rubric_total, Verdict, MAX_TOTAL_SCORE, SCORE_RUBRIC};

    #[test]
    fn rubric_adds_up_to_one_hundred() {
        assert_eq!(rubric_total(), u32::from(MAX_TOTAL_SCORE));
        assert_eq!(SCORE_RUBRIC.len(), 8);
    }

    #[test]
    fn sentinel_verdict_has_a_complete_shape() {
        let verdict = Verdict::sentinel("Analysis failed");
        assert!(verdict.is_sentinel());
        assert_eq!(verdict.final_verdict, "Analysis failed");
        assert_eq!(verdict.total_score, 0);

        let value = serde_json::to_value(&verdict).expect("serialize");
        assert_eq!(value["winningCar"], "Error");
        assert!(value["detailedScores"].is_object());
        assert!(value["keyStrengths"].is_array());
    }
}
