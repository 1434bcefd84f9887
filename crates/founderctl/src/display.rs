//! Terminal rendering for plan output.

use console::Emoji;
use founder_common::{BusinessPlanDraft, GeneratePlanResponse, HealthResponse, PlanSource};
use owo_colors::OwoColorize;

static CHECK: Emoji<'static, 'static> = Emoji("✓ ", "");
static WARN: Emoji<'static, 'static> = Emoji("⚠ ", "! ");

/// Print a generated plan as titled sections.
pub fn render_plan(response: &GeneratePlanResponse) {
    println!("{}", "Business Plan".bold());
    println!(
        "{} {}   {} {}",
        "Scale:".dimmed(),
        response.scale.label(),
        "Source:".dimmed(),
        response.source.as_str()
    );
    if response.source == PlanSource::Fallback {
        println!(
            "{}",
            format!("{}Backend unavailable; showing demo content.", WARN).yellow()
        );
    }

    render_sections(&response.plan);

    println!();
    println!(
        "{}",
        format!("Generated in {} ms ({})", response.elapsed_ms, response.request_id).dimmed()
    );
}

fn render_sections(plan: &BusinessPlanDraft) {
    section("Executive Summary", plan.executive_summary.as_deref());
    section("Problem", plan.problem_statement.as_deref());
    section("Solution", plan.solution_description.as_deref());
    section("Market Analysis", plan.market_analysis.as_deref());
    section("Business Model", plan.business_model.as_deref());
    section("Marketing Strategy", plan.marketing_strategy.as_deref());
    section("Operational Plan", plan.operational_plan.as_deref());
    section("Management Team", plan.management_team.as_deref());
    section("Financial Projections", plan.financial_projections.as_deref());
    section("Funding Requirements", plan.funding_requirements.as_deref());
    section("Risk Analysis", plan.risk_analysis.as_deref());
    section("Timeline", plan.timeline.as_deref());
}

fn section(title: &str, body: Option<&str>) {
    if let Some(text) = body {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", text);
    }
}

/// Print daemon health.
pub fn render_health(health: &HealthResponse) {
    println!(
        "{}founderd {} is {} (up {}s)",
        CHECK,
        health.version,
        health.status.green(),
        health.uptime_secs
    );
}
