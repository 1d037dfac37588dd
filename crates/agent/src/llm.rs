use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Inline image returned by a provider, `data` is base64.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClientInfo {
    pub provider: String,
    pub model: String,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;

    async fn generate_image(&self, _prompt: &str) -> Result<Option<ImagePayload>> {
        Ok(None)
    }

    fn describe(&self) -> ClientInfo;
}
