mod anthropic;
mod gemini;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use caradvisor_core::config::{LlmConfig, LlmProvider};
use reqwest::Client;
use secrecy::ExposeSecret;

pub use anthropic::AnthropicClient;
pub use gemini::GeminiClient;

use crate::llm::LlmClient;

/// Sampling settings shared by every provider.
#[derive(Clone, Debug)]
pub struct ProviderSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl ProviderSettings {
    pub fn from_config(config: &LlmConfig) -> Self {
        Self {
            base_url: config.effective_base_url().trim_end_matches('/').to_string(),
            model: config.effective_model().to_string(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

pub fn client_from_config(config: &LlmConfig) -> Result<Arc<dyn LlmClient>> {
    let api_key = config
        .api_key
        .as_ref()
        .map(|key| key.expose_secret().trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| anyhow!("llm.api_key is not configured"))?;

    // Outer bound only, the dispatcher deadline fires first.
    let http = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs.saturating_add(5)))
        .build()
        .context("failed to build http client")?;
    let settings = ProviderSettings::from_config(config);

    Ok(match config.provider {
        LlmProvider::Anthropic => Arc::new(AnthropicClient::new(http, api_key, settings)),
        LlmProvider::Gemini => Arc::new(GeminiClient::new(http, api_key, settings)),
    })
}

/// Drops markdown code fences some models wrap JSON in.
pub fn strip_code_fences(text: &str) -> String {
    let mut lines: Vec<&str> = text.trim().lines().collect();

    if lines.first().is_some_and(|line| line.trim_start().starts_with("```")) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| line.trim() == "```") {
        lines.pop();
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use caradvisor_core::config::{AppConfig, LlmProvider};

    use super::{client_from_config, strip_code_fences, ProviderSettings};

    #[test]
    fn strips_json_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```JSON\n{\"a\":1}\n```\n"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn settings_fall_back_to_provider_defaults() {
        let mut config = AppConfig::default().llm;
        config.provider = LlmProvider::Anthropic;
        config.base_url = Some("http://localhost:9999/".to_string());

        let settings = ProviderSettings::from_config(&config);
        assert_eq!(settings.model, "claude-3-5-haiku-20241022");
        assert_eq!(settings.base_url, "http://localhost:9999");
        assert_eq!(settings.max_tokens, 4096);
    }

    #[test]
    fn client_requires_an_api_key() {
        let config = AppConfig::default().llm;
        assert!(client_from_config(&config).is_err());

        let mut config = AppConfig::default().llm;
        config.api_key = Some("key".to_string().into());
        let client = client_from_config(&config).expect("client");
        assert_eq!(client.describe().provider, "gemini");
        assert_eq!(client.describe().model, "gemini-2.0-flash-exp");
    }
}
