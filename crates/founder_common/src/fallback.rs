//! Deterministic demo plan.
//!
//! Used whenever the LLM backend is unreachable, disabled, or returns
//! garbage, so the product still shows a complete draft. The caller routes
//! this content through the same validation pipeline as generated plans.

use crate::plan::BusinessPlanDraft;

/// Flavor bucket for the demo content.
fn flavor(industry: &str) -> Flavor {
    if industry.eq_ignore_ascii_case("food & delivery") {
        Flavor::Food
    } else if industry.eq_ignore_ascii_case("technology")
        || industry.eq_ignore_ascii_case("fintech")
    {
        Flavor::Software
    } else {
        Flavor::General
    }
}

enum Flavor {
    Food,
    Software,
    General,
}

/// Build a complete twelve-section demo plan for the venture.
pub fn demo_plan(title: &str, industry: &str) -> BusinessPlanDraft {
    let name = if title.trim().is_empty() { "The company" } else { title };
    let sector = if industry.trim().is_empty() { "its market" } else { industry };

    let (market_analysis, business_model, financial_projections, funding_requirements) =
        match flavor(industry) {
            Flavor::Food => (
                format!(
                    "The local dining and delivery market around {name} is worth roughly \
                     $2 billion across the metro area and growing about 8% a year. \
                     Demand concentrates on weekday lunch and weekend evenings."
                ),
                format!(
                    "{name} earns revenue from in-person sales, pre-orders through the \
                     companion app, and a small catering line. Average ticket size is \
                     projected between $9 and $14."
                ),
                format!(
                    "{name} projects $400K revenue in year one, reaching $1.2M by year \
                     three at a 12% net margin as repeat business builds."
                ),
                format!(
                    "{name} is seeking $350K to cover fit-out, initial inventory, and six \
                     months of operating runway."
                ),
            ),
            Flavor::Software => (
                format!(
                    "The addressable market for {name} in the {sector} segment is \
                     estimated at $40 billion, expanding roughly 20% annually as \
                     mid-market buyers standardize on cloud tooling."
                ),
                format!(
                    "{name} sells tiered subscriptions with usage-based overages, landing \
                     with a self-serve tier and expanding into annual enterprise \
                     contracts."
                ),
                format!(
                    "{name} projects $1.5M ARR in year one and $12M ARR by year three, \
                     with gross margins near 80%."
                ),
                format!(
                    "{name} is raising $4M to fund product engineering and the first \
                     go-to-market hires."
                ),
            ),
            Flavor::General => (
                format!(
                    "The {sector} market addressable by {name} is estimated at $10 \
                     billion, growing around 10% annually. Early adopters are \
                     underserved by incumbent offerings."
                ),
                format!(
                    "{name} combines direct sales with channel partnerships, pricing on \
                     annual contracts with volume discounts."
                ),
                format!(
                    "{name} projects $800K revenue in year one, growing to $6M by year \
                     three as the sales team ramps."
                ),
                format!("{name} is seeking $2M to fund operations through break-even."),
            ),
        };

    BusinessPlanDraft {
        executive_summary: Some(format!(
            "{name} addresses a clear gap in {sector} with a focused offering and a \
             credible path to sustainable revenue. The team combines domain \
             experience with disciplined execution."
        )),
        problem_statement: Some(format!(
            "Customers in {sector} lose time and money to fragmented, outdated \
             options that were not designed around their actual workflow."
        )),
        solution_description: Some(format!(
            "{name} delivers a purpose-built alternative that removes the main \
             friction points and is simple to adopt from day one."
        )),
        market_analysis: Some(market_analysis),
        business_model: Some(business_model),
        marketing_strategy: Some(format!(
            "{name} will grow through word of mouth, targeted local and digital \
             campaigns, and partnerships that reach customers where they already are."
        )),
        operational_plan: Some(format!(
            "Operations start lean: a small core team, clear supplier and vendor \
             agreements, and weekly metrics reviews to keep unit economics honest."
        )),
        management_team: Some(
            "The founding team covers product, operations, and sales, with advisors \
             filling finance and legal gaps until full-time hires are justified."
                .to_string(),
        ),
        financial_projections: Some(financial_projections),
        funding_requirements: Some(funding_requirements),
        risk_analysis: Some(
            "Key risks are slower-than-planned customer acquisition, pricing \
             pressure from incumbents, and hiring delays. Each has a named \
             mitigation and an early-warning metric."
                .to_string(),
        ),
        timeline: Some(
            "Quarter one: launch preparation. Quarter two: first paying customers. \
             Quarters three and four: steady growth and a review of expansion \
             options."
                .to_string(),
        ),
    }
}
