//! Scale-dependent market size limits.
//!
//! Static lookup table, values in billions of dollars. Global SaaS ceilings
//! are refined by industry because worldwide software markets genuinely
//! differ by vertical.

use serde::{Deserialize, Serialize};

use super::scale::BusinessScale;

/// Ceilings for plausible financial claims at one scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleLimits {
    /// Largest total-addressable-market claim left untouched.
    pub max_tam: f64,
    /// Replacement value used when a claim exceeds `max_tam`.
    pub preferred_tam: f64,
    /// Largest plausible revenue figure at this scale.
    pub max_revenue: f64,
}

const fn limits(max_tam: f64, preferred_tam: f64, max_revenue: f64) -> ScaleLimits {
    ScaleLimits {
        max_tam,
        preferred_tam,
        max_revenue,
    }
}

/// Look up the limits for a scale. Pure table access, no failure path.
pub fn get_market_size_limits(scale: BusinessScale, industry: &str) -> ScaleLimits {
    match scale {
        BusinessScale::LocalSmb => limits(0.5, 0.1, 0.005),
        BusinessScale::Regional => limits(5.0, 2.0, 0.05),
        BusinessScale::National => limits(50.0, 20.0, 0.5),
        BusinessScale::GlobalSaas => global_saas_limits(industry),
    }
}

fn global_saas_limits(industry: &str) -> ScaleLimits {
    if industry.eq_ignore_ascii_case("technology") {
        limits(300.0, 100.0, 2.0)
    } else if industry.eq_ignore_ascii_case("fintech") {
        limits(250.0, 80.0, 1.5)
    } else if industry.eq_ignore_ascii_case("healthcare") {
        limits(150.0, 60.0, 1.0)
    } else if industry.eq_ignore_ascii_case("e-commerce & retail") {
        limits(200.0, 75.0, 1.5)
    } else {
        limits(100.0, 50.0, 1.0)
    }
}
