//! Advisor API routes.
//!
//! - `GET  /api/CarAdvisor`          readiness probe with the known markets
//! - `POST /api/CarAdvisor/analyze`  full segment analysis and verdict
//! - `POST /api/CarAdvisor/image`    illustrative image for a named car

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use caradvisor_agent::AdvisorRuntime;
use caradvisor_core::{AnalysisResult, ApplicationError, BudgetRequest, RawBudgetRequest};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

#[derive(Clone)]
pub struct AdvisorState {
    runtime: Arc<AdvisorRuntime>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    pub condition: &'static str,
    pub correlation_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub markets: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageRequest {
    pub car_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub car_name: String,
    pub mime_type: String,
    pub data: String,
}

type Rejection = (StatusCode, Json<ErrorBody>);

pub fn router(runtime: Arc<AdvisorRuntime>) -> Router {
    Router::new()
        .route("/api/CarAdvisor", get(readiness))
        .route("/api/CarAdvisor/analyze", post(analyze))
        .route("/api/CarAdvisor/image", post(image))
        .with_state(AdvisorState { runtime })
}

async fn readiness(State(state): State<AdvisorState>) -> Json<Readiness> {
    Json(Readiness { status: "ready", markets: state.runtime.market_names() })
}

async fn analyze(
    State(state): State<AdvisorState>,
    body: Result<Json<RawBudgetRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, Rejection> {
    let correlation_id = Uuid::new_v4().to_string();

    let Json(raw) = body.map_err(|rejection| {
        malformed_body(rejection, "malformed_budget", correlation_id.clone())
    })?;
    let request = BudgetRequest::try_from(raw)
        .map_err(|error| reject(ApplicationError::from(error), &correlation_id))?;
    let result = state
        .runtime
        .analyze_with_correlation(request, &correlation_id)
        .await
        .map_err(|error| reject(error, &correlation_id))?;

    Ok(Json(result))
}

async fn image(
    State(state): State<AdvisorState>,
    body: Result<Json<ImageRequest>, JsonRejection>,
) -> Result<Json<ImageResponse>, Rejection> {
    let correlation_id = Uuid::new_v4().to_string();
    let Json(body) = body.map_err(|rejection| {
        malformed_body(rejection, "malformed_request", correlation_id.clone())
    })?;
    let car_name = body.car_name.trim();
    if car_name.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "car name is required".to_string(),
            "empty_car_name",
            correlation_id,
        ));
    }

    match state.runtime.generate_image(car_name).await {
        Ok(Some(image)) => Ok(Json(ImageResponse {
            car_name: car_name.to_string(),
            mime_type: image.mime_type,
            data: image.data,
        })),
        Ok(None) => Err(error_response(
            StatusCode::NOT_FOUND,
            format!("no image could be generated for {car_name}"),
            "no_image",
            correlation_id,
        )),
        Err(error) => {
            warn!(
                event_name = "server.image.failed",
                correlation_id = %correlation_id,
                error = %error,
                "image generation failed"
            );
            Err(error_response(
                StatusCode::BAD_GATEWAY,
                error.to_string(),
                "integration_failure",
                correlation_id,
            ))
        }
    }
}

fn reject(error: ApplicationError, correlation_id: &str) -> Rejection {
    let interface = error.into_interface(correlation_id);
    let status =
        StatusCode::from_u16(interface.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    warn!(
        event_name = "server.analyze.rejected",
        correlation_id,
        condition = interface.condition(),
        status = status.as_u16(),
        error = %interface.message(),
        "analysis request rejected"
    );

    error_response(
        status,
        interface.message().to_string(),
        interface.condition(),
        interface.correlation_id().to_string(),
    )
}

/// Undecodable bodies get the same structured error as domain rejections.
fn malformed_body(
    rejection: JsonRejection,
    condition: &'static str,
    correlation_id: String,
) -> Rejection {
    let message = rejection.body_text();
    warn!(
        event_name = "server.request.malformed",
        correlation_id = %correlation_id,
        condition,
        error = %message,
        "request body could not be decoded"
    );
    error_response(StatusCode::BAD_REQUEST, message, condition, correlation_id)
}

fn error_response(
    status: StatusCode,
    error: String,
    condition: &'static str,
    correlation_id: String,
) -> Rejection {
    (status, Json(ErrorBody { error, condition, correlation_id }))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::extract::State;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Json;
    use caradvisor_agent::{
        AdvisorRuntime, AgentReply, ClientInfo, ImagePayload, JuryReply, ReasoningService,
        SegmentBrief,
    };
    use caradvisor_core::{
        BudgetRequest, CarSuggestion, RawBudgetRequest, SegmentProposal, StaticMarketCatalog,
        Verdict,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::{analyze, image, router, AdvisorState, ImageRequest};

    #[derive(Default)]
    struct StubReasoning {
        agent_calls: AtomicUsize,
    }

    #[async_trait]
    impl ReasoningService for StubReasoning {
        async fn call_agent(&self, brief: &SegmentBrief<'_>) -> Result<AgentReply> {
            self.agent_calls.fetch_add(1, Ordering::SeqCst);
            Ok(AgentReply::Parsed {
                suggestions: vec![CarSuggestion {
                    make: "Mazda".to_string(),
                    model: brief.classification.name().to_string(),
                    year: "2024".to_string(),
                    price: "31,000 USD".to_string(),
                    ..CarSuggestion::default()
                }],
                recommendation: None,
            })
        }

        async fn jury_decision(
            &self,
            proposals: &[SegmentProposal],
            _request: &BudgetRequest,
        ) -> Result<JuryReply> {
            let winner = proposals
                .last()
                .and_then(|proposal| proposal.suggestions.first())
                .ok_or_else(|| anyhow!("no candidates"))?;
            Ok(JuryReply::Parsed(Verdict {
                winning_car: winner.display_name(),
                winning_car_price: winner.price.clone(),
                total_score: 88,
                ..Verdict::default()
            }))
        }

        async fn generate_image(&self, car_name: &str) -> Result<Option<ImagePayload>> {
            match car_name {
                "Unknown Car" => Ok(None),
                "Broken Car" => Err(anyhow!("provider returned 500")),
                _ => Ok(Some(ImagePayload {
                    mime_type: "image/png".to_string(),
                    data: "iVBORw0KGgo=".to_string(),
                })),
            }
        }

        fn describe(&self) -> ClientInfo {
            ClientInfo { provider: "stub".to_string(), model: "stub-1".to_string() }
        }
    }

    fn runtime(reasoning: Arc<StubReasoning>) -> Arc<AdvisorRuntime> {
        Arc::new(AdvisorRuntime::new(Arc::new(StaticMarketCatalog::new()), reasoning))
    }

    fn state(reasoning: Arc<StubReasoning>) -> State<AdvisorState> {
        State(AdvisorState { runtime: runtime(reasoning) })
    }

    fn raw(min: &str, max: &str, country: &str) -> RawBudgetRequest {
        RawBudgetRequest {
            min_budget: min.to_string(),
            max_budget: max.to_string(),
            preferences: "daily commute".to_string(),
            country: country.to_string(),
            currency: "USD".to_string(),
        }
    }

    #[tokio::test]
    async fn analyze_returns_recommendations_and_winner() {
        let reasoning = Arc::new(StubReasoning::default());

        let body = Ok(Json(raw("25,000", "50000", "USA")));
        let Json(result) =
            analyze(state(reasoning.clone()), body).await.expect("analysis should succeed");

        assert_eq!(result.recommendations.len(), 5);
        assert_eq!(reasoning.agent_calls.load(Ordering::SeqCst), 5);
        assert_eq!(result.winner.winning_car, "Mazda Electric 2024");
        assert_eq!(result.winner.total_score, 88);
    }

    #[tokio::test]
    async fn analyze_rejects_inverted_budget_before_dispatch() {
        let reasoning = Arc::new(StubReasoning::default());

        let request = Ok(Json(raw("60000", "50000", "USA")));
        let (status, Json(body)) = analyze(state(reasoning.clone()), request)
            .await
            .expect_err("inverted budget should be rejected");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.condition, "malformed_budget");
        assert!(!body.correlation_id.is_empty());
        assert_eq!(reasoning.agent_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn analyze_rejects_unknown_market_and_non_numeric_budget() {
        let request = Ok(Json(raw("25000", "50000", "Atlantis")));
        let (status, Json(body)) =
            analyze(state(Arc::default()), request).await.expect_err("unknown market");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.condition, "unknown_market");
        assert!(body.error.contains("Atlantis"));

        let request = Ok(Json(raw("abc", "50000", "USA")));
        let (status, Json(body)) =
            analyze(state(Arc::default()), request).await.expect_err("non-numeric budget");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.condition, "malformed_budget");
    }

    #[tokio::test]
    async fn image_maps_outcomes_to_status_codes() {
        let request = |name: &str| Ok(Json(ImageRequest { car_name: name.to_string() }));

        let Json(found) =
            image(state(Arc::default()), request("Mazda CX-5 2024")).await.expect("image");
        assert_eq!(found.car_name, "Mazda CX-5 2024");
        assert_eq!(found.mime_type, "image/png");

        let cases = [
            ("   ", StatusCode::BAD_REQUEST, "empty_car_name"),
            ("Unknown Car", StatusCode::NOT_FOUND, "no_image"),
            ("Broken Car", StatusCode::BAD_GATEWAY, "integration_failure"),
        ];
        for (name, expected_status, expected_condition) in cases {
            let (status, Json(body)) =
                image(state(Arc::default()), request(name)).await.expect_err("rejected");
            assert_eq!(status, expected_status, "{name}");
            assert_eq!(body.condition, expected_condition, "{name}");
        }
    }

    #[tokio::test]
    async fn router_serves_readiness_and_camel_case_error_bodies() {
        let app = router(runtime(Arc::default()));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/CarAdvisor").body(Body::empty()).expect("req"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let payload: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(payload["status"], "ready");
        assert!(payload["markets"].as_array().is_some_and(|markets| !markets.is_empty()));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/CarAdvisor/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "minBudget": "1000",
                            "maxBudget": "2000",
                            "country": "Nowhere",
                            "currency": "USD",
                        })
                        .to_string(),
                    ))
                    .expect("req"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let payload: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(payload["condition"], "unknown_market");
        assert!(payload["correlationId"].is_string());
        assert!(payload["error"].as_str().is_some_and(|error| error.contains("Nowhere")));
    }

    #[tokio::test]
    async fn router_answers_undecodable_budget_with_structured_error() {
        let body = json!({
            "minBudget": 25000,
            "maxBudget": 50000,
            "country": "USA",
            "currency": "USD",
        });
        let response = router(runtime(Arc::default()))
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/CarAdvisor/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("req"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let payload: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(payload["condition"], "malformed_budget");
        assert!(payload["correlationId"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(payload["error"].is_string());
    }
}
