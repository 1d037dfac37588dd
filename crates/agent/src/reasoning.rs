use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use caradvisor_core::{BudgetRequest, SegmentClassification, SegmentProposal};
use chrono::{NaiveDate, Utc};

use crate::llm::{ClientInfo, ImagePayload, LlmClient};
use crate::parse::{parse_agent_reply, parse_jury_reply, AgentReply, JuryReply};
use crate::prompts::{agent_prompt, image_prompt, jury_prompt};

/// Everything one segment agent is told about the client.
#[derive(Clone, Copy, Debug)]
pub struct SegmentBrief<'a> {
    pub classification: SegmentClassification,
    pub request: &'a BudgetRequest,
    pub advisory: Option<&'a str>,
}

/// The external reasoning collaborator. Errors are transport failures;
/// replies that arrive but cannot be decoded are `Unparseable`.
#[async_trait]
pub trait ReasoningService: Send + Sync {
    async fn call_agent(&self, brief: &SegmentBrief<'_>) -> Result<AgentReply>;

    async fn jury_decision(
        &self,
        proposals: &[SegmentProposal],
        request: &BudgetRequest,
    ) -> Result<JuryReply>;

    async fn generate_image(&self, car_name: &str) -> Result<Option<ImagePayload>>;

    fn describe(&self) -> ClientInfo;
}

/// Prompts an [`LlmClient`] and decodes what comes back.
pub struct LlmReasoningService {
    client: Arc<dyn LlmClient>,
    today: Option<NaiveDate>,
}

impl LlmReasoningService {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client, today: None }
    }

    /// Pins the date used in prompts.
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[async_trait]
impl ReasoningService for LlmReasoningService {
    async fn call_agent(&self, brief: &SegmentBrief<'_>) -> Result<AgentReply> {
        let prompt = agent_prompt(
            &brief.classification.segment,
            brief.classification.status,
            brief.request,
            brief.advisory,
            self.today(),
        );
        let text = self.client.complete(&prompt).await?;
        Ok(parse_agent_reply(&text))
    }

    async fn jury_decision(
        &self,
        proposals: &[SegmentProposal],
        request: &BudgetRequest,
    ) -> Result<JuryReply> {
        let prompt = jury_prompt(proposals, request, self.today());
        let text = self.client.complete(&prompt).await?;
        Ok(parse_jury_reply(&text))
    }

    async fn generate_image(&self, car_name: &str) -> Result<Option<ImagePayload>> {
        self.client.generate_image(&image_prompt(car_name)).await
    }

    fn describe(&self) -> ClientInfo {
        self.client.describe()
    }
}
