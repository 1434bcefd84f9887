//! Business plan data model.
//!
//! Field names serialize in camelCase because that is the JSON shape the
//! generator is prompted to produce. Every section is unstructured prose;
//! absent sections stay `None` and are skipped by validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::validation::BusinessScale;

/// A founder's generation request: free text plus a short industry label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub title: String,
    pub description: String,
    pub industry: String,
}

/// One drafted business plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessPlanDraft {
    pub executive_summary: Option<String>,
    pub problem_statement: Option<String>,
    pub solution_description: Option<String>,
    pub market_analysis: Option<String>,
    pub business_model: Option<String>,
    pub marketing_strategy: Option<String>,
    pub operational_plan: Option<String>,
    pub management_team: Option<String>,
    pub financial_projections: Option<String>,
    pub funding_requirements: Option<String>,
    pub risk_analysis: Option<String>,
    pub timeline: Option<String>,
}

impl BusinessPlanDraft {
    /// Build a draft from untyped generator output, keeping only string
    /// fields. A section that came back as a number, object, or null is
    /// dropped rather than failing the whole plan.
    pub fn from_value_lossy(value: &Value) -> Self {
        let get = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            executive_summary: get("executiveSummary"),
            problem_statement: get("problemStatement"),
            solution_description: get("solutionDescription"),
            market_analysis: get("marketAnalysis"),
            business_model: get("businessModel"),
            marketing_strategy: get("marketingStrategy"),
            operational_plan: get("operationalPlan"),
            management_team: get("managementTeam"),
            financial_projections: get("financialProjections"),
            funding_requirements: get("fundingRequirements"),
            risk_analysis: get("riskAnalysis"),
            timeline: get("timeline"),
        }
    }

    /// True when no section survived parsing.
    pub fn is_empty(&self) -> bool {
        self.executive_summary.is_none()
            && self.problem_statement.is_none()
            && self.solution_description.is_none()
            && self.market_analysis.is_none()
            && self.business_model.is_none()
            && self.marketing_strategy.is_none()
            && self.operational_plan.is_none()
            && self.management_team.is_none()
            && self.financial_projections.is_none()
            && self.funding_requirements.is_none()
            && self.risk_analysis.is_none()
            && self.timeline.is_none()
    }
}

/// Where a plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// Drafted by the LLM backend.
    Llm,
    /// Deterministic demo content, used when the backend is unavailable.
    Fallback,
}

impl PlanSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Llm => "llm",
            Self::Fallback => "fallback",
        }
    }
}

/// A validated plan plus the metadata reported alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub request_id: Uuid,
    pub plan: BusinessPlanDraft,
    pub scale: BusinessScale,
    pub source: PlanSource,
    pub generated_at: DateTime<Utc>,
}
