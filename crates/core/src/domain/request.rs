use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Analyze request as posted by clients. Budgets arrive as numeric strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBudgetRequest {
    pub min_budget: String,
    pub max_budget: String,
    pub preferences: String,
    pub country: String,
    pub currency: String,
}

impl Default for RawBudgetRequest {
    fn default() -> Self {
        Self {
            min_budget: String::new(),
            max_budget: String::new(),
            preferences: String::new(),
            country: "Turkey".to_string(),
            currency: "TRY".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BudgetRequest {
    pub min_budget: u64,
    pub max_budget: u64,
    pub preferences: String,
    pub market: String,
    pub currency: String,
}

impl BudgetRequest {
    pub fn new(
        min_budget: u64,
        max_budget: u64,
        preferences: impl Into<String>,
        market: impl Into<String>,
        currency: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if min_budget > max_budget {
            return Err(DomainError::MalformedBudget {
                reason: format!(
                    "minimum budget {min_budget} is greater than maximum budget {max_budget}"
                ),
            });
        }

        Ok(Self {
            min_budget,
            max_budget,
            preferences: preferences.into(),
            market: market.into(),
            currency: currency.into(),
        })
    }

    /// Same client, same market, different budget range. Used for the
    /// reference budget handed to the reasoning service.
    pub fn with_budget(&self, min_budget: u64, max_budget: u64) -> Self {
        Self { min_budget, max_budget, ..self.clone() }
    }
}

impl TryFrom<RawBudgetRequest> for BudgetRequest {
    type Error = DomainError;

    fn try_from(raw: RawBudgetRequest) -> Result<Self, Self::Error> {
        let min_budget = parse_budget("minimum", &raw.min_budget)?;
        let max_budget = parse_budget("maximum", &raw.max_budget)?;
        Self::new(
            min_budget,
            max_budget,
            raw.preferences.trim(),
            raw.country.trim(),
            raw.currency.trim(),
        )
    }
}

/// Accepts whole numbers with optional `,` `_` or space digit grouping.
pub fn parse_budget(label: &str, raw: &str) -> Result<u64, DomainError> {
    let cleaned =
        raw.trim().chars().filter(|ch| !matches!(ch, ',' | '_' | ' ')).collect::<String>();

    if cleaned.is_empty() {
        return Err(DomainError::MalformedBudget { reason: format!("{label} budget is empty") });
    }

    cleaned.parse::<u64>().map_err(|_| DomainError::MalformedBudget {
        reason: format!("{label} budget `{}` is not a whole number", raw.trim()),
    })
}
