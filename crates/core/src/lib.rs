//! Segment selection, validation and price normalization for the car advisor.
//!
//! Everything in this crate is deterministic: the reasoning service lives in
//! `caradvisor-agent` and only sees the segments this crate selects.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod pricing;
pub mod selection;
pub mod validation;

pub use catalog::{MarketCatalog, StaticMarketCatalog};
pub use domain::market::{MarketProfile, PriceBand, RegionPricing};
pub use domain::proposal::{AnalysisResult, CarSuggestion, SegmentProposal};
pub use domain::request::{BudgetRequest, RawBudgetRequest};
pub use domain::segment::{BudgetStatus, SegmentClassification, SegmentDefinition, SEGMENTS};
pub use domain::verdict::{RubricCriterion, Verdict, SCORE_RUBRIC};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use pricing::PriceNormalizer;
pub use selection::{plan_segments, RelevanceFilter, SegmentPlan, SelectionPolicy};
pub use validation::viable_proposals;
