use std::sync::Arc;
use std::time::Duration;

use caradvisor_core::domain::proposal::PARSED_RECOMMENDATION;
use caradvisor_core::{BudgetRequest, SegmentClassification, SegmentProposal};
use futures::future::join_all;
use tokio::time::timeout;
use tracing::warn;

use crate::parse::AgentReply;
use crate::reasoning::{ReasoningService, SegmentBrief};

/// Fans one agent call out per selected segment and waits for all of them.
pub struct Dispatcher {
    reasoning: Arc<dyn ReasoningService>,
    call_timeout: Duration,
}

impl Dispatcher {
    pub fn new(reasoning: Arc<dyn ReasoningService>, call_timeout: Duration) -> Self {
        Self { reasoning, call_timeout }
    }

    /// One proposal per entry of `selected`, in the same order. A call that
    /// fails, times out or cannot be parsed yields an empty proposal.
    pub async fn dispatch(
        &self,
        selected: &[SegmentClassification],
        request: &BudgetRequest,
        advisory: Option<&str>,
        correlation_id: &str,
    ) -> Vec<SegmentProposal> {
        let calls = selected.iter().map(|classification| {
            let brief = SegmentBrief { classification: *classification, request, advisory };
            self.call_segment(brief, correlation_id)
        });

        join_all(calls).await
    }

    async fn call_segment(&self, brief: SegmentBrief<'_>, correlation_id: &str) -> SegmentProposal {
        let segment = &brief.classification.segment;
        let status = brief.classification.status;

        let reply = timeout(self.call_timeout, self.reasoning.call_agent(&brief)).await;
        let (kind, reason) = match reply {
            Ok(Ok(AgentReply::Parsed { suggestions, recommendation })) => {
                let recommendation =
                    recommendation.unwrap_or_else(|| PARSED_RECOMMENDATION.to_string());
                return SegmentProposal::new(segment, status, suggestions, recommendation);
            }
            Ok(Ok(AgentReply::Unparseable { reason })) => ("unparseable", reason),
            Ok(Err(error)) => ("transport", error.to_string()),
            Err(_) => ("timeout", format!("no reply within {:?}", self.call_timeout)),
        };

        warn!(
            event_name = "agent.dispatch.degraded",
            correlation_id,
            segment = segment.name,
            kind,
            reason = %reason,
            "segment agent reply degraded to an empty proposal"
        );
        SegmentProposal::empty(segment, status)
    }
}
