use caradvisor_agent::AdvisorRuntime;
use caradvisor_core::config::{AppConfig, LoadOptions};
use caradvisor_core::{AnalysisResult, ApplicationError, StaticMarketCatalog};
use serde::Serialize;

use crate::commands::{BudgetInput, CommandResult, EXIT_CONFIG, EXIT_INTEGRATION};

#[derive(Debug, Serialize)]
struct AnalyzeReport {
    command: &'static str,
    status: &'static str,
    provider: String,
    model: String,
    result: AnalysisResult,
}

pub fn run(input: BudgetInput) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "analyze",
                "config_validation",
                error.to_string(),
                EXIT_CONFIG,
            );
        }
    };

    let request = match input.into_request(&StaticMarketCatalog::new()) {
        Ok(request) => request,
        Err(error) => return CommandResult::rejected("analyze", &error),
    };

    let advisor = match AdvisorRuntime::from_config(&config) {
        Ok(advisor) => advisor,
        Err(error) => {
            return CommandResult::failure(
                "analyze",
                "reasoning_setup",
                error.to_string(),
                EXIT_CONFIG,
            );
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "analyze",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                EXIT_INTEGRATION,
            );
        }
    };

    match runtime.block_on(advisor.analyze(request)) {
        Ok(result) => {
            let info = advisor.reasoning_info();
            CommandResult::report(&AnalyzeReport {
                command: "analyze",
                status: "ok",
                provider: info.provider,
                model: info.model,
                result,
            })
        }
        Err(ApplicationError::Domain(error)) => CommandResult::rejected("analyze", &error),
        Err(error) => {
            let interface = error.into_interface("cli");
            CommandResult::failure(
                "analyze",
                interface.condition(),
                interface.message(),
                EXIT_INTEGRATION,
            )
        }
    }
}
