pub mod policy;
pub mod relevance;

use serde::Serialize;

use crate::domain::market::MarketProfile;
use crate::domain::request::BudgetRequest;
use crate::domain::segment::SegmentClassification;
use crate::errors::DomainError;

pub use policy::{SelectionPolicy, DEFAULT_MIN_SEGMENTS, DEFAULT_TARGET_SEGMENTS};
pub use relevance::{classify_band, is_available, RelevanceFilter};

/// Outcome of filtering and selection for one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SegmentPlan {
    /// Every segment with its classification, unavailable ones included.
    pub assessed: Vec<SegmentClassification>,
    pub selected: Vec<SegmentClassification>,
}

pub fn plan_segments(
    filter: &RelevanceFilter<'_>,
    policy: &SelectionPolicy,
    request: &BudgetRequest,
    profile: &MarketProfile,
) -> Result<SegmentPlan, DomainError> {
    let assessed = filter.assess(request, profile);
    let selected = policy.select(&assessed, request)?;
    Ok(SegmentPlan { assessed, selected })
}
