use std::sync::Arc;
use std::time::Duration;

use caradvisor_core::{BudgetRequest, SegmentProposal, Verdict};
use tokio::time::timeout;
use tracing::warn;

use crate::parse::JuryReply;
use crate::reasoning::ReasoningService;

pub const PARSE_FAILED: &str = "Parse failed";
pub const ANALYSIS_FAILED: &str = "Analysis failed";

/// Single arbitration call over the viable proposals. Never fails: anything
/// short of a decoded verdict becomes the sentinel.
pub struct Jury {
    reasoning: Arc<dyn ReasoningService>,
    call_timeout: Duration,
}

impl Jury {
    pub fn new(reasoning: Arc<dyn ReasoningService>, call_timeout: Duration) -> Self {
        Self { reasoning, call_timeout }
    }

    pub async fn decide(
        &self,
        proposals: &[SegmentProposal],
        request: &BudgetRequest,
        correlation_id: &str,
    ) -> Verdict {
        let reply =
            timeout(self.call_timeout, self.reasoning.jury_decision(proposals, request)).await;
        let (kind, reason, verdict) = match reply {
            Ok(Ok(JuryReply::Parsed(verdict))) => return verdict,
            Ok(Ok(JuryReply::Unparseable { reason })) => ("unparseable", reason, PARSE_FAILED),
            Ok(Err(error)) => ("transport", error.to_string(), ANALYSIS_FAILED),
            Err(_) => {
                ("timeout", format!("no reply within {:?}", self.call_timeout), ANALYSIS_FAILED)
            }
        };

        warn!(
            event_name = "agent.jury.degraded",
            correlation_id,
            kind,
            reason = %reason,
            candidates = proposals.len(),
            "jury reply degraded to the sentinel verdict"
        );
        Verdict::sentinel(verdict)
    }
}
