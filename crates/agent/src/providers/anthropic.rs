//! Anthropic Messages API (`POST /v1/messages`).

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::warn;

use super::{strip_code_fences, ProviderSettings};
use crate::llm::{ClientInfo, LlmClient};

const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    http: Client,
    api_key: String,
    settings: ProviderSettings,
}

impl AnthropicClient {
    pub fn new(http: Client, api_key: String, settings: ProviderSettings) -> Self {
        Self { http, api_key, settings }
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.settings.model,
            "max_tokens": self.settings.max_tokens,
            "temperature": self.settings.temperature,
            "messages": [{ "role": "user", "content": prompt }],
        })
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1/messages", self.settings.base_url);
        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.request_body(prompt))
            .send()
            .await
            .context("anthropic request failed")?;

        let status = response.status();
        let body = response.text().await.context("failed to read anthropic response")?;
        if !status.is_success() {
            warn!(event_name = "agent.provider.http_error", provider = "anthropic", %status);
            return Err(anyhow!("anthropic api returned {status}: {body}"));
        }

        let value: Value =
            serde_json::from_str(&body).context("anthropic response is not valid json")?;
        extract_text(&value).map(|text| strip_code_fences(&text))
    }

    fn describe(&self) -> ClientInfo {
        ClientInfo { provider: "anthropic".to_string(), model: self.settings.model.clone() }
    }
}

fn extract_text(value: &Value) -> Result<String> {
    value["content"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("anthropic response has no content[0].text"))
}

#[cfg(test)]
mod tests {
    use reqwest::Client;
    use serde_json::json;

    use super::{extract_text, AnthropicClient};
    use crate::providers::ProviderSettings;

    fn settings() -> ProviderSettings {
        ProviderSettings {
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-3-5-haiku-20241022".to_string(),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }

    #[test]
    fn request_body_matches_messages_api() {
        let client = AnthropicClient::new(Client::new(), "key".to_string(), settings());
        let body = client.request_body("hello");

        assert_eq!(body["model"], "claude-3-5-haiku-20241022");
        assert_eq!(body["max_tokens"], 4096);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
    }

    #[test]
    fn text_comes_from_first_content_block() {
        let response = json!({ "content": [{ "type": "text", "text": "{\"ok\":true}" }] });
        assert_eq!(extract_text(&response).expect("text"), "{\"ok\":true}");
        assert!(extract_text(&json!({ "content": [] })).is_err());
    }
}
