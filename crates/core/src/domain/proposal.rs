use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::segment::{BudgetStatus, SegmentDefinition};
use crate::domain::verdict::Verdict;

/// Recommendation text attached to every proposal built from a parsed reply.
pub const PARSED_RECOMMENDATION: &str = "See suggestions list";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarSuggestion {
    #[serde(deserialize_with = "lenient_string")]
    pub make: String,
    #[serde(deserialize_with = "lenient_string")]
    pub model: String,
    #[serde(deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(deserialize_with = "lenient_string")]
    pub engine: String,
    #[serde(deserialize_with = "lenient_string")]
    pub fuel: String,
    #[serde(deserialize_with = "lenient_string")]
    pub safety_rating: String,
    #[serde(deserialize_with = "lenient_string")]
    pub reasoning: String,
}

impl CarSuggestion {
    /// "Make Model Year", the identifier the jury refers to.
    pub fn display_name(&self) -> String {
        [self.make.trim(), self.model.trim(), self.year.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentProposal {
    pub agent_name: String,
    pub agent_icon: String,
    pub suggestions: Vec<CarSuggestion>,
    pub budget_status: BudgetStatus,
    pub recommendation: String,
}

impl SegmentProposal {
    pub fn new(
        segment: &SegmentDefinition,
        budget_status: BudgetStatus,
        suggestions: Vec<CarSuggestion>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: segment.name.to_string(),
            agent_icon: segment.icon.to_string(),
            suggestions,
            budget_status,
            recommendation: recommendation.into(),
        }
    }

    /// Placeholder for a segment whose call failed or could not be parsed.
    pub fn empty(segment: &SegmentDefinition, budget_status: BudgetStatus) -> Self {
        Self::new(segment, budget_status, Vec::new(), String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub recommendations: Vec<SegmentProposal>,
    pub winner: Verdict,
}

/// Reasoning services are loose with JSON types; a year or price may come
/// back as a number. Anything scalar is kept as text, null becomes empty.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{CarSuggestion, SegmentProposal};
    use crate::domain::segment::{BudgetStatus, SEGMENTS};

    #[test]
    fn suggestion_accepts_numeric_year_and_missing_fields() {
        let decoded: CarSuggestion = serde_json::from_str(
            r#"{"make":"Toyota","model":"Corolla","year":2024,"price":null}"#,
        )
        .expect("lenient decode");

        assert_eq!(decoded.year, "2024");
        assert_eq!(decoded.price, "");
        assert_eq!(decoded.safety_rating, "");
        assert_eq!(decoded.display_name(), "Toyota Corolla 2024");
    }

    #[test]
    fn empty_proposal_keeps_segment_identity() {
        let proposal = SegmentProposal::empty(&SEGMENTS[4], BudgetStatus::TooCheap);
        assert_eq!(proposal.agent_name, "Budget");
        assert_eq!(proposal.agent_icon, "💸");
        assert_eq!(proposal.budget_status, BudgetStatus::TooCheap);
        assert!(proposal.is_empty());
        assert!(proposal.recommendation.is_empty());
    }

    #[test]
    fn proposal_serializes_with_camel_case_keys() {
        let proposal = SegmentProposal::empty(&SEGMENTS[0], BudgetStatus::TooExpensive);
        let value = serde_json::to_value(&proposal).expect("serialize");
        assert_eq!(value["agentName"], "Ultra-Luxury");
        assert_eq!(value["budgetStatus"], "too-expensive");
        assert!(value["suggestions"].as_array().is_some_and(Vec::is_empty));
    }
}
