use std::env;
use std::fs;
use std::path::Path;

use caradvisor_core::config::{resolve_config_path, AppConfig, LoadOptions, ENV_PREFIX};
use secrecy::ExposeSecret;
use serde::Serialize;
use toml::Value;

use crate::commands::{CommandResult, EXIT_CONFIG};

#[derive(Debug, Serialize)]
struct ConfigField {
    key: &'static str,
    value: String,
    source: String,
}

#[derive(Debug, Serialize)]
struct ConfigReport {
    command: &'static str,
    status: &'static str,
    precedence: &'static str,
    config_file: Option<String>,
    fields: Vec<ConfigField>,
}

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                format!("config validation failed: {error}"),
                EXIT_CONFIG,
            );
        }
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source =
        |key: &str| field_source(key, config_file_doc.as_ref(), config_file_path.as_deref());

    let llm = &config.llm;
    let api_key = llm
        .api_key
        .as_ref()
        .map(|key| redact_token(key.expose_secret()))
        .unwrap_or_else(|| "<unset>".to_string());
    let values: [(&'static str, String); 15] = [
        ("llm.provider", llm.provider.as_str().to_string()),
        ("llm.model", llm.effective_model().to_string()),
        ("llm.base_url", llm.effective_base_url().to_string()),
        ("llm.api_key", api_key),
        ("llm.timeout_secs", llm.timeout_secs.to_string()),
        ("llm.max_tokens", llm.max_tokens.to_string()),
        ("llm.temperature", llm.temperature.to_string()),
        ("server.bind_address", config.server.bind_address.clone()),
        ("server.port", config.server.port.to_string()),
        ("server.graceful_shutdown_secs", config.server.graceful_shutdown_secs.to_string()),
        ("analysis.min_segments", config.analysis.min_segments.to_string()),
        ("analysis.target_segments", config.analysis.target_segments.to_string()),
        ("analysis.region_pricing", config.analysis.region_pricing.to_string()),
        ("logging.level", config.logging.level.clone()),
        ("logging.format", format!("{:?}", config.logging.format).to_lowercase()),
    ];

    let fields = values
        .into_iter()
        .map(|(key, value)| ConfigField { key, value, source: source(key) })
        .collect::<Vec<_>>();

    CommandResult::report(&ConfigReport {
        command: "config",
        status: "ok",
        precedence: "override > env > file > default",
        config_file: config_file_path.map(|path| path.display().to_string()),
        fields,
    })
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

/// Environment keys for a dotted config path, primary first. Logging keys
/// also honour the short `CARADVISOR_LOG_*` aliases.
fn env_keys(key_path: &str) -> Vec<String> {
    let primary = format!("{ENV_PREFIX}{}", key_path.replace('.', "_").to_ascii_uppercase());
    let mut keys = vec![primary];
    if let Some(field) = key_path.strip_prefix("logging.") {
        keys.push(format!("{ENV_PREFIX}LOG_{}", field.to_ascii_uppercase()));
    }
    keys
}

fn field_source(
    key_path: &str,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys(key_path).into_iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

/// Keeps a recognisable prefix (`sk-ant-...` becomes `sk-***`), hides the rest.
fn redact_token(token: &str) -> String {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return "<empty>".to_string();
    }

    if let Some((prefix, _)) = trimmed.split_once('-') {
        return format!("{prefix}-***");
    }

    "<redacted>".to_string()
}
