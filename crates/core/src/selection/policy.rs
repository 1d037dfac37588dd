use crate::domain::request::BudgetRequest;
use crate::domain::segment::{BudgetStatus, SegmentClassification};
use crate::errors::DomainError;

pub const DEFAULT_MIN_SEGMENTS: usize = 3;
pub const DEFAULT_TARGET_SEGMENTS: usize = 4;

/// Chooses which classified segments get an agent.
///
/// Every in-budget segment is kept. When that falls short of `target_segments`
/// the shortfall is filled from out-of-budget segments in definition order.
/// Fewer than `min_segments` after that rejects the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionPolicy {
    pub min_segments: usize,
    pub target_segments: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self { min_segments: DEFAULT_MIN_SEGMENTS, target_segments: DEFAULT_TARGET_SEGMENTS }
    }
}

impl SelectionPolicy {
    pub fn new(min_segments: usize, target_segments: usize) -> Self {
        Self { min_segments, target_segments }
    }

    pub fn select(
        &self,
        classified: &[SegmentClassification],
        request: &BudgetRequest,
    ) -> Result<Vec<SegmentClassification>, DomainError> {
        let eligible = || {
            classified
                .iter()
                .filter(|classification| classification.status != BudgetStatus::Unavailable)
        };

        let mut selected: Vec<SegmentClassification> = eligible()
            .filter(|classification| classification.status.is_in_budget())
            .copied()
            .collect();

        let shortfall = self.target_segments.saturating_sub(selected.len());
        selected.extend(
            eligible()
                .filter(|classification| !classification.status.is_in_budget())
                .take(shortfall)
                .copied(),
        );

        if selected.len() < self.min_segments {
            return Err(DomainError::InsufficientSegments {
                min_budget: request.min_budget,
                max_budget: request.max_budget,
                currency: request.currency.clone(),
                market: request.market.clone(),
                eligible: selected.len(),
            });
        }

        Ok(selected)
    }
}
