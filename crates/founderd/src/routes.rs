//! API routes for founderd.

use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use founder_common::{
    validation, GeneratePlanResponse, HealthResponse, PlanRequest, ValidatePlanRequest,
    ValidatePlanResponse,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Plan Routes
// ============================================================================

pub fn plan_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/plan/generate", post(generate_plan))
        .route("/v1/plan/validate", post(validate_plan))
}

async fn generate_plan(
    State(state): State<AppStateArc>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<GeneratePlanResponse>, (StatusCode, String)> {
    info!("  Generating plan for \"{}\" ({})", req.title, req.industry);
    let started = Instant::now();

    // The generator blocks on the LLM backend; keep it off the async workers.
    let worker_state = state.clone();
    let generated = tokio::task::spawn_blocking(move || worker_state.generator.generate(&req))
        .await
        .map_err(|e| {
            error!("  Plan generation task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    info!(
        "  Plan {} ready ({}, {})",
        generated.request_id,
        generated.scale,
        generated.source.as_str()
    );

    Ok(Json(GeneratePlanResponse {
        request_id: generated.request_id,
        plan: generated.plan,
        scale: generated.scale,
        source: generated.source,
        generated_at: generated.generated_at,
        elapsed_ms: started.elapsed().as_millis() as u64,
    }))
}

async fn validate_plan(
    State(_state): State<AppStateArc>,
    Json(mut req): Json<ValidatePlanRequest>,
) -> Json<ValidatePlanResponse> {
    let scale =
        validation::classify_business_scale(&req.title, &req.description, &req.industry);
    validation::validate_plan_value(&mut req.plan, &req.industry, &req.title, &req.description);

    Json(ValidatePlanResponse {
        scale,
        plan: req.plan,
    })
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health))
}

async fn health(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use founder_common::llm_client::{FakeLlmClient, LlmError};
    use founder_common::PlanGenerator;
    use serde_json::json;

    fn test_state() -> AppStateArc {
        let llm = FakeLlmClient::always_error(LlmError::Disabled);
        Arc::new(AppState::new(PlanGenerator::new(Arc::new(llm))))
    }

    #[tokio::test]
    async fn test_generate_serves_fallback_when_backend_down() {
        let req = PlanRequest {
            title: "Downtown Coffee Roasters".to_string(),
            description: "A neighborhood cafe with a loyalty app".to_string(),
            industry: "Food & Delivery".to_string(),
        };
        let response = generate_plan(State(test_state()), Json(req)).await.unwrap();
        assert_eq!(response.0.source.as_str(), "fallback");
        assert_eq!(response.0.scale.as_str(), "local_smb");
        assert!(!response.0.plan.is_empty());
    }

    #[tokio::test]
    async fn test_validate_rewrites_and_skips() {
        let req = ValidatePlanRequest {
            plan: json!({
                "fundingRequirements": "$75M in funding requested",
                "marketAnalysis": 7,
            }),
            title: "Corner Bakery".to_string(),
            description: "A family bakery".to_string(),
            industry: "Food & Delivery".to_string(),
        };
        let response = validate_plan(State(test_state()), Json(req)).await;
        assert_eq!(
            response.0.plan["fundingRequirements"],
            json!("$500K in funding requested")
        );
        assert_eq!(response.0.plan["marketAnalysis"], json!(7));
    }

    #[tokio::test]
    async fn test_health_reports_version() {
        let response = health(State(test_state())).await;
        assert_eq!(response.0.status, "ok");
        assert_eq!(response.0.version, env!("CARGO_PKG_VERSION"));
    }
}
