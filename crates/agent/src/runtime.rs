use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use caradvisor_core::config::AppConfig;
use caradvisor_core::{
    plan_segments, viable_proposals, AnalysisResult, ApplicationError, BudgetRequest,
    MarketCatalog, PriceNormalizer, RelevanceFilter, SegmentPlan, SelectionPolicy,
    StaticMarketCatalog,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::dispatcher::Dispatcher;
use crate::jury::Jury;
use crate::llm::{ClientInfo, ImagePayload};
use crate::providers::client_from_config;
use crate::reasoning::{LlmReasoningService, ReasoningService};

pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs one analysis end to end: catalog lookup, segment selection,
/// concurrent agent dispatch, validation, arbitration and price normalization.
pub struct AdvisorRuntime {
    catalog: Arc<dyn MarketCatalog>,
    reasoning: Arc<dyn ReasoningService>,
    policy: SelectionPolicy,
    call_timeout: Duration,
}

impl AdvisorRuntime {
    pub fn new(catalog: Arc<dyn MarketCatalog>, reasoning: Arc<dyn ReasoningService>) -> Self {
        Self {
            catalog,
            reasoning,
            policy: SelectionPolicy::default(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = client_from_config(&config.llm)?;
        let catalog = if config.analysis.region_pricing {
            StaticMarketCatalog::new()
        } else {
            StaticMarketCatalog::without_region_pricing()
        };

        Ok(Self::new(Arc::new(catalog), Arc::new(LlmReasoningService::new(client)))
            .with_policy(config.analysis.selection_policy())
            .with_call_timeout(Duration::from_secs(config.llm.timeout_secs)))
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    pub fn market_names(&self) -> Vec<String> {
        self.catalog.market_names()
    }

    pub fn reasoning_info(&self) -> ClientInfo {
        self.reasoning.describe()
    }

    /// Filtering and selection only, no reasoning calls.
    pub fn plan(&self, request: &BudgetRequest) -> Result<SegmentPlan, ApplicationError> {
        let profile = self.catalog.market_profile(&request.market)?;
        Ok(plan_segments(&RelevanceFilter::default(), &self.policy, request, &profile)?)
    }

    pub async fn analyze(
        &self,
        request: BudgetRequest,
    ) -> Result<AnalysisResult, ApplicationError> {
        let correlation_id = Uuid::new_v4().to_string();
        self.analyze_with_correlation(request, &correlation_id).await
    }

    pub async fn analyze_with_correlation(
        &self,
        request: BudgetRequest,
        correlation_id: &str,
    ) -> Result<AnalysisResult, ApplicationError> {
        info!(
            event_name = "advisor.analysis.start",
            correlation_id,
            market = %request.market,
            min_budget = request.min_budget,
            max_budget = request.max_budget,
            "analysis started"
        );

        let profile = self.catalog.market_profile(&request.market)?;
        let planned = plan_segments(&RelevanceFilter::default(), &self.policy, &request, &profile);
        let plan = match planned {
            Ok(plan) => plan,
            Err(error) => {
                warn!(
                    event_name = "advisor.selection.insufficient",
                    correlation_id,
                    market = %profile.market,
                    error = %error,
                    "not enough segments to dispatch"
                );
                return Err(error.into());
            }
        };
        let selected: Vec<&str> =
            plan.selected.iter().map(|classification| classification.name()).collect();
        info!(
            event_name = "advisor.selection.completed",
            correlation_id,
            market = %profile.market,
            selected = ?selected,
            "segments selected"
        );

        let normalizer = profile
            .region_pricing
            .as_ref()
            .map(|pricing| PriceNormalizer::new(pricing, &profile.currency));
        let reference_request = match &normalizer {
            Some(normalizer) => normalizer.reference_request(&request),
            None => request.clone(),
        };

        let dispatcher = Dispatcher::new(self.reasoning.clone(), self.call_timeout);
        let advisory = profile.advisory.as_deref();
        let mut recommendations =
            dispatcher.dispatch(&plan.selected, &reference_request, advisory, correlation_id).await;

        let viable = match viable_proposals(&recommendations) {
            Ok(viable) => viable,
            Err(error) => {
                warn!(
                    event_name = "advisor.validation.no_viable",
                    correlation_id,
                    dispatched = recommendations.len(),
                    "every proposal fell outside the budget"
                );
                return Err(error.into());
            }
        };

        let jury = Jury::new(self.reasoning.clone(), self.call_timeout);
        let mut winner = jury.decide(&viable, &reference_request, correlation_id).await;

        if let Some(normalizer) = &normalizer {
            let changed = normalizer.normalize_result(&mut recommendations, &mut winner);
            info!(
                event_name = "advisor.pricing.normalized",
                correlation_id,
                market = %profile.market,
                changed,
                "prices restated in the market's terms"
            );
        }

        info!(
            event_name = "advisor.analysis.completed",
            correlation_id,
            proposals = recommendations.len(),
            viable = viable.len(),
            winner = %winner.winning_car,
            "analysis completed"
        );

        Ok(AnalysisResult { recommendations, winner })
    }

    pub async fn generate_image(
        &self,
        car_name: &str,
    ) -> Result<Option<ImagePayload>, ApplicationError> {
        let call = self.reasoning.generate_image(car_name);
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(Ok(image)) => Ok(image),
            Ok(Err(error)) => Err(ApplicationError::Integration(error.to_string())),
            Err(_) => Err(ApplicationError::Integration(format!(
                "image generation timed out after {:?}",
                self.call_timeout
            ))),
        }
    }
}
