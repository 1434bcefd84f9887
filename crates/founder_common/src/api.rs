//! Wire types shared by the daemon and the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::plan::{BusinessPlanDraft, PlanSource};
use crate::validation::BusinessScale;

/// Response for `POST /v1/plan/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlanResponse {
    pub request_id: Uuid,
    pub plan: BusinessPlanDraft,
    pub scale: BusinessScale,
    pub source: PlanSource,
    pub generated_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

/// Request for `POST /v1/plan/validate`. The plan is a free JSON object so
/// callers can validate drafts they produced elsewhere; non-string fields
/// pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatePlanRequest {
    pub plan: Value,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub industry: String,
}

/// Response for `POST /v1/plan/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatePlanResponse {
    pub scale: BusinessScale,
    pub plan: Value,
}

/// Response for `GET /v1/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}
