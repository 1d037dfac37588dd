use std::sync::Arc;

use axum::Router;
use caradvisor_agent::AdvisorRuntime;
use caradvisor_core::config::{AppConfig, ConfigError};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{advisor, health};

pub struct Application {
    pub config: AppConfig,
    pub runtime: Arc<AdvisorRuntime>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("reasoning client setup failed: {0}")]
    Reasoning(String),
}

impl Application {
    pub fn new(config: AppConfig, runtime: AdvisorRuntime) -> Self {
        Self { config, runtime: Arc::new(runtime) }
    }

    /// Advisor API and health behind a permissive CORS layer.
    pub fn router(&self) -> Router {
        advisor::router(self.runtime.clone())
            .merge(health::router(self.runtime.clone()))
            .layer(CorsLayer::permissive())
    }
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        provider = config.llm.provider.as_str(),
        "starting application bootstrap"
    );

    let runtime = AdvisorRuntime::from_config(&config)
        .map_err(|error| BootstrapError::Reasoning(error.to_string()))?;
    let reasoning = runtime.reasoning_info();
    info!(
        event_name = "system.bootstrap.reasoning_ready",
        correlation_id = "bootstrap",
        provider = %reasoning.provider,
        model = %reasoning.model,
        markets = runtime.market_names().len(),
        "reasoning client initialized"
    );

    Ok(Application::new(config, runtime))
}
