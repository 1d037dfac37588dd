//! Prompt text for segment agents, the jury and image generation.

use caradvisor_core::domain::verdict::SCORE_RUBRIC;
use caradvisor_core::{BudgetRequest, BudgetStatus, SegmentDefinition, SegmentProposal};
use chrono::{Datelike, NaiveDate};
use serde_json::json;

/// Model years offered: the current year and the eight before it.
pub const MODEL_YEAR_WINDOW: i32 = 8;

pub fn budget_context(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::TooExpensive => {
            "WARNING: Your segment is ABOVE the client's budget. Acknowledge this but recommend \
             the closest options or used alternatives."
        }
        BudgetStatus::TooCheap => {
            "WARNING: Your segment is BELOW the client's budget. Acknowledge the client can \
             afford more premium cars."
        }
        BudgetStatus::InBudget | BudgetStatus::Unavailable => "Your segment fits the budget.",
    }
}

pub fn agent_prompt(
    segment: &SegmentDefinition,
    status: BudgetStatus,
    request: &BudgetRequest,
    advisory: Option<&str>,
    today: NaiveDate,
) -> String {
    let current_date = today.format("%B %Y");
    let current_year = today.year();
    let min_year = current_year - MODEL_YEAR_WINDOW;
    let market = &request.market;
    let currency = &request.currency;
    let market_rules = advisory
        .map(|advisory| format!("\nMARKET RULES (VERY IMPORTANT):\n{advisory}\n"))
        .unwrap_or_default();

    format!(
        r#"You are a professional automotive expert specializing in {focus} vehicles for the {market} market.

CONTEXT:
- Current Date: {current_date}
- Target Market: {market}
- Client Budget: {min} - {max} {currency} (STRICT MAXIMUM - DO NOT EXCEED)
- Client Preferences: {preferences}
- Your Specific Brands: {brands}
- Budget Status: {context}
{market_rules}
TASK: Recommend 2-3 specific vehicles ({min_year}-{current_year} models) currently available in {market}.

CRITICAL REQUIREMENTS:
1. ALL PRICES MUST BE UNDER {max} {currency} - THIS IS A HARD LIMIT
2. USE REAL MARKET PRICES for {market} in {current_date}
3. DETAILED SPECS: HP, Torque, 0-100 km/h times
4. SAFETY: NCAP ratings and safety features
5. OWNERSHIP: Fuel consumption and maintenance costs
6. If no model of your brands fits, say so in "recommendation" using the words "outside this budget range"

OUTPUT: Return ONLY valid JSON, no markdown, no explanation:
{{
  "suggestions": [
    {{
      "make": "Brand Name",
      "model": "Model Name",
      "year": "{current_year}",
      "price": "45,000 {currency}",
      "engine": "Engine specs: Type, CC, HP, Torque, 0-100, Transmission, Drive",
      "fuel": "Fuel type, tank size, consumption L/100km, monthly cost",
      "safetyRating": "NCAP stars, airbags, safety tech",
      "reasoning": "Why this car fits the client (max 150 words)"
    }}
  ],
  "recommendation": "Optional one-line summary"
}}"#,
        focus = segment.focus,
        min = request.min_budget,
        max = request.max_budget,
        preferences = request.preferences,
        brands = segment.brands,
        context = budget_context(status),
    )
}

/// Candidate list handed to the jury: one entry per proposal, cars named
/// "make model year".
pub fn jury_candidates(proposals: &[SegmentProposal]) -> serde_json::Value {
    proposals
        .iter()
        .map(|proposal| {
            json!({
                "agent": proposal.agent_name,
                "cars": proposal.suggestions.iter().map(|car| json!({
                    "name": car.display_name(),
                    "price": car.price,
                    "specs": car.engine,
                    "safety": car.safety_rating,
                })).collect::<Vec<_>>(),
            })
        })
        .collect()
}

pub fn jury_prompt(
    proposals: &[SegmentProposal],
    request: &BudgetRequest,
    today: NaiveDate,
) -> String {
    let candidates = serde_json::to_string_pretty(&jury_candidates(proposals))
        .unwrap_or_else(|_| "[]".to_string());
    let scoring = SCORE_RUBRIC
        .iter()
        .map(|criterion| format!("- {}: /{}", criterion.label, criterion.max_points))
        .collect::<Vec<_>>()
        .join("\n");
    let example_scores = SCORE_RUBRIC
        .iter()
        .map(|criterion| format!("    \"{}\": {}", criterion.key, criterion.max_points))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        r#"You are the HEAD AUTOMOTIVE JURY for the {market} market.
DATE: {date}

CLIENT PROFILE:
- Budget: {min} - {max} {currency}
- Needs: {preferences}

CANDIDATES FROM AGENTS:
{candidates}

TASK: Select the ONE absolute best car for this client.

SCORING (Max 100):
{scoring}

OUTPUT: Return ONLY valid JSON, no markdown:
{{
  "winningCar": "Brand Model Year",
  "winningCarPrice": "45,000 {currency}",
  "finalVerdict": "4-5 sentence verdict explaining why this car wins",
  "totalScore": 85,
  "detailedScores": {{
{example_scores}
  }},
  "keyStrengths": ["Strength 1", "Strength 2", "Strength 3"],
  "runnerUps": ["Brand Model Year"]
}}"#,
        market = request.market,
        date = today.format("%B %Y"),
        min = request.min_budget,
        max = request.max_budget,
        currency = request.currency,
        preferences = request.preferences,
    )
}

pub fn image_prompt(car_name: &str) -> String {
    format!(
        "A photorealistic studio photograph of a {car_name}, three-quarter front view, \
         clean neutral background, no text or watermarks."
    )
}

#[cfg(test)]
mod tests {
    use caradvisor_core::{BudgetRequest, BudgetStatus, CarSuggestion, SegmentProposal, SEGMENTS};
    use chrono::NaiveDate;

    use super::{agent_prompt, budget_context, jury_candidates, jury_prompt};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date")
    }

    fn request() -> BudgetRequest {
        BudgetRequest::new(800_000, 2_000_000, "family of four", "Turkey", "TRY").expect("request")
    }

    #[test]
    fn agent_prompt_carries_date_window_and_segment() {
        let prompt = agent_prompt(&SEGMENTS[3], BudgetStatus::InBudget, &request(), None, today());

        assert!(prompt.contains("Current Date: October 2026"));
        assert!(prompt.contains("(2018-2026 models)"));
        assert!(prompt.contains("Client Budget: 800000 - 2000000 TRY"));
        assert!(prompt.contains("Toyota, Honda"));
        assert!(prompt.contains("Your segment fits the budget."));
        assert!(!prompt.contains("MARKET RULES"));
    }

    #[test]
    fn agent_prompt_includes_market_advisory() {
        let prompt = agent_prompt(
            &SEGMENTS[0],
            BudgetStatus::TooExpensive,
            &request(),
            Some("Only dealership-backed models."),
            today(),
        );

        assert!(prompt.contains("MARKET RULES"));
        assert!(prompt.contains("Only dealership-backed models."));
        assert!(prompt.contains(budget_context(BudgetStatus::TooExpensive)));
    }

    #[test]
    fn jury_candidates_name_cars_by_make_model_year() {
        let proposals = vec![SegmentProposal::new(
            &SEGMENTS[3],
            BudgetStatus::InBudget,
            vec![CarSuggestion {
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: "2024".to_string(),
                price: "1,500,000 TRY".to_string(),
                engine: "1.5 hybrid".to_string(),
                safety_rating: "5 stars".to_string(),
                ..CarSuggestion::default()
            }],
            "See suggestions list",
        )];

        let candidates = jury_candidates(&proposals);
        assert_eq!(candidates[0]["agent"], "Mainstream");
        assert_eq!(candidates[0]["cars"][0]["name"], "Toyota Corolla 2024");
        assert_eq!(candidates[0]["cars"][0]["specs"], "1.5 hybrid");

        let prompt = jury_prompt(&proposals, &request(), today());
        assert!(prompt.contains("- Safety: /20"));
        assert!(prompt.contains("- Client Match: /5"));
        assert!(prompt.contains("\"MarketFit\": 10"));
        assert!(prompt.contains("Toyota Corolla 2024"));
    }
}
