//! Plan generation pipeline.
//!
//! Prompt -> LLM -> JSON parse -> validation -> typed draft. Every path out
//! of here has been validated: the successful LLM path validates the raw
//! JSON before typing it, and the fallback path validates the demo plan the
//! same way. A backend failure degrades, it never propagates.

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::fallback;
use crate::llm_client::{LlmClient, LlmError};
use crate::plan::{BusinessPlanDraft, GeneratedPlan, PlanRequest, PlanSource};
use crate::prompts;
use crate::validation;

pub struct PlanGenerator {
    llm: Arc<dyn LlmClient>,
}

impl PlanGenerator {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Draft and validate one plan. Infallible by design: any backend
    /// problem falls back to validated demo content.
    pub fn generate(&self, request: &PlanRequest) -> GeneratedPlan {
        let request_id = Uuid::new_v4();
        let scale = validation::classify_business_scale(
            &request.title,
            &request.description,
            &request.industry,
        );

        let (plan, source) = match self.generate_via_llm(request) {
            Ok(plan) => {
                info!("  Plan drafted by LLM backend ({})", request_id);
                (plan, PlanSource::Llm)
            }
            Err(err) => {
                warn!("  Plan generation fell back to demo content: {}", err);
                let draft = fallback::demo_plan(&request.title, &request.industry);
                let validated = validation::validate_business_plan(
                    draft,
                    &request.industry,
                    &request.title,
                    &request.description,
                );
                (validated, PlanSource::Fallback)
            }
        };

        GeneratedPlan {
            request_id,
            plan,
            scale,
            source,
            generated_at: Utc::now(),
        }
    }

    fn generate_via_llm(&self, request: &PlanRequest) -> Result<BusinessPlanDraft, LlmError> {
        let user_prompt =
            prompts::plan_user_prompt(&request.title, &request.description, &request.industry);

        let mut value = self
            .llm
            .complete_json(prompts::PLAN_SYSTEM_PROMPT, &user_prompt)?;

        validation::validate_plan_value(
            &mut value,
            &request.industry,
            &request.title,
            &request.description,
        );

        let draft = BusinessPlanDraft::from_value_lossy(&value);
        if draft.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(draft)
    }
}
