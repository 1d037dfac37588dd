use crate::domain::market::{MarketProfile, PriceBand};
use crate::domain::request::BudgetRequest;
use crate::domain::segment::{BudgetStatus, SegmentClassification, SegmentDefinition, SEGMENTS};

/// Decides which segments a market can serve and how each sits against the
/// client's budget.
#[derive(Clone, Copy, Debug)]
pub struct RelevanceFilter<'a> {
    segments: &'a [SegmentDefinition],
}

impl Default for RelevanceFilter<'static> {
    fn default() -> Self {
        Self::new(&SEGMENTS)
    }
}

impl<'a> RelevanceFilter<'a> {
    pub fn new(segments: &'a [SegmentDefinition]) -> Self {
        Self { segments }
    }

    /// Every segment in definition order, unavailable ones included.
    pub fn assess(
        &self,
        request: &BudgetRequest,
        profile: &MarketProfile,
    ) -> Vec<SegmentClassification> {
        self.segments
            .iter()
            .map(|segment| SegmentClassification::new(*segment, classify(segment, request, profile)))
            .collect()
    }

    /// Segments that exist in the market, in definition order.
    #[cfg(test)]
    pub fn filter(
        &self,
        request: &BudgetRequest,
        profile: &MarketProfile,
    ) -> Vec<SegmentClassification> {
        self.assess(request, profile)
            .into_iter()
            .filter(|classification| classification.status != BudgetStatus::Unavailable)
            .collect()
    }
}

pub fn is_available(segment: &SegmentDefinition, profile: &MarketProfile) -> bool {
    segment.brand_tokens().any(|token| profile.has_brand_matching(token))
}

/// Exactly one of in-budget, too-expensive or too-cheap for any band.
pub fn classify_band(band: PriceBand, budget_min: u64, budget_max: u64) -> BudgetStatus {
    if band.overlaps(budget_min, budget_max) {
        BudgetStatus::InBudget
    } else if band.min > budget_max {
        BudgetStatus::TooExpensive
    } else {
        BudgetStatus::TooCheap
    }
}

fn classify(
    segment: &SegmentDefinition,
    request: &BudgetRequest,
    profile: &MarketProfile,
) -> BudgetStatus {
    if !is_available(segment, profile) {
        return BudgetStatus::Unavailable;
    }

    match profile.price_band(segment.name) {
        Some(band) => classify_band(band, request.min_budget, request.max_budget),
        // No band, nothing to disqualify the segment on.
        None => BudgetStatus::InBudget,
    }
}
