use caradvisor_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use caradvisor_core::{
    plan_segments, MarketCatalog, RelevanceFilter, SegmentClassification, SelectionPolicy,
    StaticMarketCatalog,
};
use serde::Serialize;

use crate::commands::{BudgetInput, CommandResult};

#[derive(Debug, Serialize)]
struct SegmentRow {
    segment: &'static str,
    icon: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct SegmentsReport {
    command: &'static str,
    status: &'static str,
    market: String,
    currency: String,
    min_budget: u64,
    max_budget: u64,
    assessed: Vec<SegmentRow>,
    selected: Vec<SegmentRow>,
}

/// Dry run of filtering and selection. The thresholds come from config when it
/// loads; no credentials are needed and nothing leaves the process.
pub fn run(input: BudgetInput) -> CommandResult {
    let catalog = StaticMarketCatalog::new();

    let request = match input.into_request(&catalog) {
        Ok(request) => request,
        Err(error) => return CommandResult::rejected("segments", &error),
    };
    let profile = match catalog.market_profile(&request.market) {
        Ok(profile) => profile,
        Err(error) => return CommandResult::rejected("segments", &error),
    };
    let policy = selection_policy();
    let plan = match plan_segments(&RelevanceFilter::default(), &policy, &request, &profile) {
        Ok(plan) => plan,
        Err(error) => return CommandResult::rejected("segments", &error),
    };

    CommandResult::report(&SegmentsReport {
        command: "segments",
        status: "ok",
        market: profile.market,
        currency: request.currency,
        min_budget: request.min_budget,
        max_budget: request.max_budget,
        assessed: rows(&plan.assessed),
        selected: rows(&plan.selected),
    })
}

/// Configured thresholds, or the defaults when config cannot be loaded.
fn selection_policy() -> SelectionPolicy {
    let options = LoadOptions {
        overrides: ConfigOverrides {
            llm_api_key: Some("dry-run".to_string()),
            ..ConfigOverrides::default()
        },
        ..LoadOptions::default()
    };
    AppConfig::load(options).map(|config| config.analysis.selection_policy()).unwrap_or_default()
}

fn rows(classified: &[SegmentClassification]) -> Vec<SegmentRow> {
    classified
        .iter()
        .map(|classification| SegmentRow {
            segment: classification.segment.name,
            icon: classification.segment.icon,
            status: classification.status.as_str(),
        })
        .collect()
}
