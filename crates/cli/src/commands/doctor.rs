use caradvisor_agent::providers::client_from_config;
use caradvisor_core::config::{AppConfig, LoadOptions};
use caradvisor_core::selection::{is_available, DEFAULT_MIN_SEGMENTS};
use caradvisor_core::{MarketCatalog, StaticMarketCatalog, SEGMENTS};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_catalog());
            checks.push(check_reasoning_provider(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(check_catalog());
            checks.push(DoctorCheck {
                name: "reasoning_provider",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

/// Every market must load and carry brands for at least the minimum number
/// of segments, otherwise no budget there could ever be dispatched.
fn check_catalog() -> DoctorCheck {
    let catalog = StaticMarketCatalog::new();
    let mut problems = Vec::new();
    let names = catalog.market_names();

    for name in &names {
        match catalog.market_profile(name) {
            Ok(profile) => {
                let available =
                    SEGMENTS.iter().filter(|segment| is_available(segment, &profile)).count();
                if available < DEFAULT_MIN_SEGMENTS {
                    problems.push(format!("{name}: only {available} segments have brands"));
                }
            }
            Err(error) => problems.push(format!("{name}: {error}")),
        }
    }

    if problems.is_empty() {
        DoctorCheck {
            name: "market_catalog",
            status: CheckStatus::Pass,
            details: format!("{} markets loaded", names.len()),
        }
    } else {
        DoctorCheck {
            name: "market_catalog",
            status: CheckStatus::Fail,
            details: problems.join("; "),
        }
    }
}

/// Builds the client without sending anything.
fn check_reasoning_provider(config: &AppConfig) -> DoctorCheck {
    match client_from_config(&config.llm) {
        Ok(client) => {
            let info = client.describe();
            DoctorCheck {
                name: "reasoning_provider",
                status: CheckStatus::Pass,
                details: format!(
                    "{} client ready for model `{}` at {}",
                    info.provider,
                    info.model,
                    config.llm.effective_base_url()
                ),
            }
        }
        Err(error) => DoctorCheck {
            name: "reasoning_provider",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{check_catalog, CheckStatus};

    #[test]
    fn shipped_catalog_passes_the_self_check() {
        let check = check_catalog();
        assert_eq!(check.status, CheckStatus::Pass, "{}", check.details);
    }
}
