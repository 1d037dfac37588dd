pub mod analyze;
pub mod config;
pub mod doctor;
pub mod segments;

use caradvisor_core::{BudgetRequest, DomainError, MarketCatalog, RawBudgetRequest};
use serde::Serialize;

pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_REJECTED: u8 = 3;
pub const EXIT_INTEGRATION: u8 = 4;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: 0, output: serialize_payload(&payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(&payload) }
    }

    /// Successful command whose output is a structured report.
    pub fn report(payload: &impl Serialize) -> Self {
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn rejected(command: &str, error: &DomainError) -> Self {
        Self::failure(command, error.condition(), error.to_string(), EXIT_REJECTED)
    }
}

/// Budget flags shared by `segments` and `analyze`.
#[derive(Debug, Clone)]
pub struct BudgetInput {
    pub country: String,
    pub min_budget: String,
    pub max_budget: String,
    pub currency: Option<String>,
    pub preferences: String,
}

impl BudgetInput {
    /// Parses the budget the way the HTTP API does. A missing currency is
    /// taken from the market, when the market is known.
    pub fn into_request(self, catalog: &dyn MarketCatalog) -> Result<BudgetRequest, DomainError> {
        let currency = match self.currency {
            Some(currency) => currency,
            None => catalog
                .market_profile(&self.country)
                .map(|profile| profile.currency)
                .unwrap_or_default(),
        };

        BudgetRequest::try_from(RawBudgetRequest {
            min_budget: self.min_budget,
            max_budget: self.max_budget,
            preferences: self.preferences,
            country: self.country,
            currency,
        })
    }
}

fn serialize_payload(payload: &impl Serialize) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
