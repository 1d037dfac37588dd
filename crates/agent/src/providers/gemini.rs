//! Google Generative Language API (`models/{model}:generateContent`).

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::warn;

use super::{strip_code_fences, ProviderSettings};
use crate::llm::{ClientInfo, ImagePayload, LlmClient};

pub struct GeminiClient {
    http: Client,
    api_key: String,
    settings: ProviderSettings,
}

impl GeminiClient {
    pub fn new(http: Client, api_key: String, settings: ProviderSettings) -> Self {
        Self { http, api_key, settings }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.settings.base_url, self.settings.model)
    }

    fn text_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "maxOutputTokens": self.settings.max_tokens,
                "temperature": self.settings.temperature,
            },
        })
    }

    fn image_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] },
        })
    }

    async fn generate(&self, body: &Value) -> Result<Value> {
        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .context("gemini request failed")?;

        let status = response.status();
        let text = response.text().await.context("failed to read gemini response")?;
        if !status.is_success() {
            warn!(event_name = "agent.provider.http_error", provider = "gemini", %status);
            return Err(anyhow!("gemini api returned {status}: {text}"));
        }

        serde_json::from_str(&text).context("gemini response is not valid json")
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let value = self.generate(&self.text_body(prompt)).await?;
        extract_text(&value).map(|text| strip_code_fences(&text))
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<ImagePayload>> {
        let value = self.generate(&self.image_body(prompt)).await?;
        Ok(extract_inline_image(&value))
    }

    fn describe(&self) -> ClientInfo {
        ClientInfo { provider: "gemini".to_string(), model: self.settings.model.clone() }
    }
}

fn extract_text(value: &Value) -> Result<String> {
    value["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("gemini response has no candidates[0].content.parts[0].text"))
}

fn extract_inline_image(value: &Value) -> Option<ImagePayload> {
    let parts = value["candidates"][0]["content"]["parts"].as_array()?;
    parts.iter().find_map(|part| {
        let inline = part.get("inlineData")?;
        Some(ImagePayload {
            mime_type: inline["mimeType"].as_str().unwrap_or("image/png").to_string(),
            data: inline["data"].as_str()?.to_string(),
        })
    })
}
