//! Business plan content validation.
//!
//! Generated plans routinely overstate market sizes, growth rates, and
//! funding asks. Validation runs in two stages, in order:
//! 1. Classify the venture into one of four business scales from its free
//!    text (see [`scale`]).
//! 2. Rewrite financial claims in the plan's prose down to scale-appropriate
//!    ceilings (see [`sanitize`], backed by [`magnitude`] and [`limits`]).
//!
//! The pipeline is a pure function over an in-memory record: no I/O, no
//! shared state, and it never fails. Malformed or missing fields degrade to
//! a no-op on that field.

pub mod limits;
pub mod magnitude;
pub mod sanitize;
pub mod scale;

pub use limits::{get_market_size_limits, ScaleLimits};
pub use magnitude::largest_magnitude_billions;
pub use sanitize::{clamp_funding_figures, clamp_growth_rates, clamp_market_size, MoneyField};
pub use scale::{classify_business_scale, BusinessScale, ScaleClassifier};

use crate::plan::BusinessPlanDraft;
use serde_json::{Map, Value};
use tracing::debug;

/// Plan fields that carry market-size prose and get the TAM clamp.
const MARKET_TEXT_FIELDS: [&str; 4] = [
    "marketAnalysis",
    "executiveSummary",
    "financialProjections",
    "fundingRequirements",
];

/// Validate a typed plan: classify once, then rewrite the market analysis,
/// executive summary, financial projections, and funding requirements under
/// that scale's limits. Other fields pass through untouched.
pub fn validate_business_plan(
    mut plan: BusinessPlanDraft,
    industry: &str,
    title: &str,
    description: &str,
) -> BusinessPlanDraft {
    let scale = classify_business_scale(title, description, industry);
    let limits = get_market_size_limits(scale, industry);
    debug!(scale = scale.as_str(), "validating plan content");

    for field in [
        &mut plan.market_analysis,
        &mut plan.executive_summary,
        &mut plan.financial_projections,
        &mut plan.funding_requirements,
    ] {
        if let Some(text) = field.take() {
            *field = Some(clamp_market_size(&text, limits.max_tam, limits.preferred_tam));
        }
    }

    if let Some(text) = plan.market_analysis.take() {
        plan.market_analysis = Some(clamp_growth_rates(&text));
    }
    if let Some(text) = plan.financial_projections.take() {
        plan.financial_projections = Some(clamp_funding_figures(
            &text,
            scale,
            MoneyField::Revenue,
            &limits,
        ));
    }
    if let Some(text) = plan.funding_requirements.take() {
        plan.funding_requirements = Some(clamp_funding_figures(
            &text,
            scale,
            MoneyField::Funding,
            &limits,
        ));
    }

    plan
}

/// Validate untyped generator output in place. Fields that are absent or
/// not strings are skipped, one malformed field never blocks the rest, and
/// nothing here can panic on any input shape.
pub fn validate_plan_value(plan: &mut Value, industry: &str, title: &str, description: &str) {
    let scale = classify_business_scale(title, description, industry);
    let limits = get_market_size_limits(scale, industry);

    let Some(map) = plan.as_object_mut() else {
        debug!("plan payload is not an object, skipping validation");
        return;
    };

    for key in MARKET_TEXT_FIELDS {
        rewrite_string_field(map, key, |text| {
            clamp_market_size(text, limits.max_tam, limits.preferred_tam)
        });
    }
    rewrite_string_field(map, "marketAnalysis", clamp_growth_rates);
    rewrite_string_field(map, "financialProjections", |text| {
        clamp_funding_figures(text, scale, MoneyField::Revenue, &limits)
    });
    rewrite_string_field(map, "fundingRequirements", |text| {
        clamp_funding_figures(text, scale, MoneyField::Funding, &limits)
    });
}

fn rewrite_string_field(map: &mut Map<String, Value>, key: &str, f: impl Fn(&str) -> String) {
    if let Some(Value::String(text)) = map.get(key) {
        let rewritten = f(text);
        map.insert(key.to_string(), Value::String(rewritten));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn local_plan() -> BusinessPlanDraft {
        BusinessPlanDraft {
            executive_summary: Some("Our cafe serves a $2 trillion market.".to_string()),
            market_analysis: Some(
                "The market is worth $10 billion and growing 120% annually.".to_string(),
            ),
            financial_projections: Some("We project $500M in revenue by year three.".to_string()),
            funding_requirements: Some("$75M in funding requested.".to_string()),
            risk_analysis: Some("Competition from a chain with $9 trillion in cash.".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validated_fields_are_rewritten() {
        let plan = validate_business_plan(
            local_plan(),
            "Food & Delivery",
            "Downtown Coffee Roasters",
            "A neighborhood cafe with a loyalty app",
        );

        let summary = plan.executive_summary.unwrap();
        assert!(!summary.contains("trillion"), "summary: {summary}");
        assert!(summary.contains("$0.1 billion"));

        let market = plan.market_analysis.unwrap();
        assert!(market.contains("$0.1 billion"));
        assert!(market.contains("15%"));
        assert!(!market.contains("120%"));

        assert_eq!(
            plan.financial_projections.as_deref(),
            Some("We project $5M in revenue by year three.")
        );
        assert_eq!(
            plan.funding_requirements.as_deref(),
            Some("$500K in funding requested.")
        );
    }

    #[test]
    fn test_unvalidated_fields_untouched() {
        let plan = validate_business_plan(
            local_plan(),
            "Food & Delivery",
            "Downtown Coffee Roasters",
            "A neighborhood cafe",
        );
        // Risk analysis is not one of the four validated fields.
        assert_eq!(
            plan.risk_analysis.as_deref(),
            Some("Competition from a chain with $9 trillion in cash.")
        );
    }

    #[test]
    fn test_absent_fields_skipped() {
        let plan = validate_business_plan(
            BusinessPlanDraft::default(),
            "Technology",
            "CloudMetrics AI",
            "Enterprise SaaS analytics",
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn test_value_level_skips_non_strings() {
        let mut plan = json!({
            "marketAnalysis": 42,
            "executiveSummary": null,
            "financialProjections": ["not", "a", "string"],
            "fundingRequirements": "$75M in funding requested.",
            "timeline": "Q1: open the shop",
        });
        validate_plan_value(&mut plan, "Food & Delivery", "Corner Bakery", "A family bakery");

        assert_eq!(plan["marketAnalysis"], json!(42));
        assert_eq!(plan["executiveSummary"], json!(null));
        assert_eq!(plan["financialProjections"], json!(["not", "a", "string"]));
        assert_eq!(plan["fundingRequirements"], json!("$500K in funding requested."));
        assert_eq!(plan["timeline"], json!("Q1: open the shop"));
    }

    #[test]
    fn test_value_level_tolerates_non_object() {
        let mut plan = json!("just a string");
        validate_plan_value(&mut plan, "", "", "");
        assert_eq!(plan, json!("just a string"));

        let mut plan = json!(null);
        validate_plan_value(&mut plan, "", "", "");
        assert_eq!(plan, json!(null));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let once = validate_business_plan(
            local_plan(),
            "Food & Delivery",
            "Downtown Coffee Roasters",
            "A neighborhood cafe",
        );
        let twice = validate_business_plan(
            once.clone(),
            "Food & Delivery",
            "Downtown Coffee Roasters",
            "A neighborhood cafe",
        );
        assert_eq!(once.executive_summary, twice.executive_summary);
        assert_eq!(once.market_analysis, twice.market_analysis);
    }
}
