use std::collections::BTreeMap;

use caradvisor_core::domain::proposal::lenient_string;
use caradvisor_core::domain::verdict::MAX_TOTAL_SCORE;
use caradvisor_core::{CarSuggestion, Verdict};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// What a segment agent said, once its reply has been decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentReply {
    Parsed { suggestions: Vec<CarSuggestion>, recommendation: Option<String> },
    Unparseable { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JuryReply {
    Parsed(Verdict),
    Unparseable { reason: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AgentPayload {
    suggestions: Option<Vec<CarSuggestion>>,
    #[serde(deserialize_with = "lenient_string")]
    recommendation: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct JuryPayload {
    #[serde(deserialize_with = "lenient_string")]
    winning_car: String,
    #[serde(deserialize_with = "lenient_string")]
    winning_car_price: String,
    #[serde(deserialize_with = "lenient_string")]
    final_verdict: String,
    #[serde(deserialize_with = "lenient_score")]
    total_score: i64,
    #[serde(deserialize_with = "lenient_scores")]
    detailed_scores: BTreeMap<String, u32>,
    key_strengths: Vec<String>,
    runner_ups: Vec<String>,
}

pub fn parse_agent_reply(text: &str) -> AgentReply {
    let payload = match serde_json::from_str::<AgentPayload>(text.trim()) {
        Ok(payload) => payload,
        Err(error) => return AgentReply::Unparseable { reason: error.to_string() },
    };

    let recommendation =
        Some(payload.recommendation.trim().to_string()).filter(|text| !text.is_empty());
    AgentReply::Parsed { suggestions: payload.suggestions.unwrap_or_default(), recommendation }
}

pub fn parse_jury_reply(text: &str) -> JuryReply {
    let payload = match serde_json::from_str::<JuryPayload>(text.trim()) {
        Ok(payload) => payload,
        Err(error) => return JuryReply::Unparseable { reason: error.to_string() },
    };

    if payload.winning_car.trim().is_empty() {
        return JuryReply::Unparseable { reason: "reply names no winning car".to_string() };
    }

    let total_score = payload.total_score.clamp(0, i64::from(MAX_TOTAL_SCORE));
    JuryReply::Parsed(Verdict {
        winning_car: payload.winning_car,
        winning_car_price: payload.winning_car_price,
        reasoning: payload.final_verdict.clone(),
        final_verdict: payload.final_verdict,
        total_score: u8::try_from(total_score).unwrap_or(MAX_TOTAL_SCORE),
        detailed_scores: payload.detailed_scores,
        key_strengths: payload.key_strengths,
        runner_ups: payload.runner_ups,
    })
}

fn score_from(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            number.as_i64().or_else(|| number.as_f64().map(|score| score.round() as i64))
        }
        Value::String(text) => text.trim().parse::<f64>().ok().map(|score| score.round() as i64),
        _ => None,
    }
}

fn lenient_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(score_from(&Value::deserialize(deserializer)?).unwrap_or(0))
}

fn lenient_scores<'de, D>(deserializer: D) -> Result<BTreeMap<String, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(entries) = value else {
        return Ok(BTreeMap::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| {
            let score = score_from(&value)?.clamp(0, i64::from(u32::MAX));
            Some((key, u32::try_from(score).ok()?))
        })
        .collect())
}
