//! Prompt templates for plan generation.
//!
//! The response contract is a single flat JSON object with twelve camelCase
//! string fields; the validation pipeline depends on that shape.

/// System prompt for the business plan call.
pub const PLAN_SYSTEM_PROMPT: &str = "\
You are an experienced startup advisor who writes concise, realistic \
business plans. Ground every claim in the venture described by the user. \
Keep market sizes, growth rates, and funding asks plausible for the \
venture's actual scale. Respond with a single JSON object and nothing else, \
using exactly these string fields:
{
  \"executiveSummary\": \"...\",
  \"problemStatement\": \"...\",
  \"solutionDescription\": \"...\",
  \"marketAnalysis\": \"...\",
  \"businessModel\": \"...\",
  \"marketingStrategy\": \"...\",
  \"operationalPlan\": \"...\",
  \"managementTeam\": \"...\",
  \"financialProjections\": \"...\",
  \"fundingRequirements\": \"...\",
  \"riskAnalysis\": \"...\",
  \"timeline\": \"...\"
}";

/// Build the user prompt for one generation request.
pub fn plan_user_prompt(title: &str, description: &str, industry: &str) -> String {
    format!(
        "Draft a business plan for the following venture.\n\n\
         Name: {title}\n\
         Industry: {industry}\n\
         Description: {description}\n\n\
         Write two to four sentences per section, in plain prose."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_names_every_field() {
        for field in [
            "executiveSummary",
            "problemStatement",
            "solutionDescription",
            "marketAnalysis",
            "businessModel",
            "marketingStrategy",
            "operationalPlan",
            "managementTeam",
            "financialProjections",
            "fundingRequirements",
            "riskAnalysis",
            "timeline",
        ] {
            assert!(PLAN_SYSTEM_PROMPT.contains(field), "missing {field}");
        }
    }

    #[test]
    fn test_user_prompt_includes_request() {
        let prompt = plan_user_prompt("Acme", "Rocket skates", "Retail");
        assert!(prompt.contains("Acme"));
        assert!(prompt.contains("Rocket skates"));
        assert!(prompt.contains("Retail"));
    }
}
