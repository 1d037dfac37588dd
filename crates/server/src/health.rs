use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use caradvisor_agent::AdvisorRuntime;
use chrono::Utc;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    runtime: Arc<AdvisorRuntime>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub reasoning: HealthCheck,
    pub checked_at: String,
}

pub fn router(runtime: Arc<AdvisorRuntime>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { runtime })
}

/// Liveness only. The reasoning provider is reported, not probed.
pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let info = state.runtime.reasoning_info();
    let markets = state.runtime.market_names();

    let payload = HealthResponse {
        status: "ready",
        service: HealthCheck {
            status: "ready",
            detail: format!("caradvisor-server serving {} markets", markets.len()),
        },
        reasoning: HealthCheck {
            status: "configured",
            detail: format!("{} ({})", info.provider, info.model),
        },
        checked_at: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(payload))
}
