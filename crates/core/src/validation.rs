use crate::domain::proposal::SegmentProposal;
use crate::errors::DomainError;

/// Phrases a segment agent uses when it could not stay inside the budget.
/// Matching is a plain case-insensitive substring test, so this is only an
/// approximation of "the agent gave up".
pub const OUT_OF_BUDGET_PHRASES: [&str; 2] = ["outside this budget range", "below your budget range"];

pub fn signals_out_of_budget(text: &str) -> bool {
    let text = text.to_lowercase();
    OUT_OF_BUDGET_PHRASES.iter().any(|phrase| text.contains(phrase))
}

/// Proposals worth arbitrating, in their original order.
pub fn viable_proposals(proposals: &[SegmentProposal]) -> Result<Vec<SegmentProposal>, DomainError> {
    let viable: Vec<SegmentProposal> = proposals
        .iter()
        .filter(|proposal| !signals_out_of_budget(&proposal.recommendation))
        .cloned()
        .collect();

    if viable.is_empty() {
        return Err(DomainError::NoViableCandidates { dispatched: proposals.len() });
    }

    Ok(viable)
}
