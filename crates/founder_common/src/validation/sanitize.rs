//! Financial claim clamping.
//!
//! Pure string transforms that rewrite out-of-bound claims down to
//! policy ceilings. The replacement passes reuse the same pattern families
//! the magnitude parser detects with, so a field that states one concept in
//! two notations is sanitized consistently.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use super::limits::ScaleLimits;
use super::magnitude::{
    largest_magnitude_billions, BARE_BILLION, DOLLAR_BILLION, DOLLAR_TRILLION, RAW_DOLLARS,
    USD_AMOUNT, WORD_AMOUNT,
};
use super::scale::BusinessScale;

/// `$120M`, `$75 million`
static DOLLAR_MILLIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\$\s*(\d+(?:\.\d+)?)\s*(?:million\b|m\b)").unwrap());

/// Three-or-more digit percentages: `120%`
static PCT_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3,}(?:\.\d+)?\s*%").unwrap());

/// 60-99%
static PCT_SIXTY_UP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[6-9]\d(?:\.\d+)?\s*%").unwrap());

/// 50-59%
static PCT_FIFTIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b5\d(?:\.\d+)?\s*%").unwrap());

/// Render a billions value without trailing noise: 0.1 -> "0.1", 20 -> "20".
fn format_amount(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Rewrite every recognized magnitude mention to `preferred_billions` when
/// the largest mention in `text` strictly exceeds `max_billions`. Values at
/// the limit are left alone. Once any mention is over the limit, all
/// families are substituted uniformly, including in-range mentions that
/// share a notation with the inflated one.
pub fn clamp_market_size(text: &str, max_billions: f64, preferred_billions: f64) -> String {
    let Some(observed) = largest_magnitude_billions(text) else {
        return text.to_string();
    };
    if observed <= max_billions {
        return text.to_string();
    }

    let dollar_form = format!("${} billion", format_amount(preferred_billions));
    let bare_form = format!("{} billion", format_amount(preferred_billions));

    let mut out = DOLLAR_TRILLION
        .replace_all(text, NoExpand(&dollar_form))
        .into_owned();
    out = USD_AMOUNT
        .replace_all(&out, NoExpand(&dollar_form))
        .into_owned();
    out = DOLLAR_BILLION
        .replace_all(&out, NoExpand(&dollar_form))
        .into_owned();
    out = RAW_DOLLARS
        .replace_all(&out, |caps: &regex::Captures| {
            if caps[0].starts_with('$') {
                dollar_form.clone()
            } else {
                bare_form.clone()
            }
        })
        .into_owned();
    out = WORD_AMOUNT
        .replace_all(&out, NoExpand(&bare_form))
        .into_owned();
    out = BARE_BILLION
        .replace_all(&out, NoExpand(&bare_form))
        .into_owned();
    out
}

/// Tiered growth-rate clamp: triple-digit percentages read as hype and drop
/// to 15%, 60-99% to 25%, 50-59% to 35%.
pub fn clamp_growth_rates(text: &str) -> String {
    let out = PCT_TRIPLE.replace_all(text, "15%");
    let out = PCT_SIXTY_UP.replace_all(&out, "25%");
    PCT_FIFTIES.replace_all(&out, "35%").into_owned()
}

/// Which money field a clamp applies to; a revenue projection tolerates a
/// higher ceiling than a funding ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyField {
    Revenue,
    Funding,
}

struct MoneyCaps {
    /// Millions-denominated mentions above this (in millions) are rewritten
    millions_limit: f64,
    millions_replacement: String,
    /// Billions-denominated mentions above this (in billions) are rewritten
    billions_limit: f64,
    billions_replacement: String,
}

fn caps(
    millions_limit: f64,
    millions_replacement: &str,
    billions_limit: f64,
    billions_replacement: &str,
) -> MoneyCaps {
    MoneyCaps {
        millions_limit,
        millions_replacement: millions_replacement.to_string(),
        billions_limit,
        billions_replacement: billions_replacement.to_string(),
    }
}

/// National and global ceilings derive from the scale's max revenue.
fn derived_caps(ceiling_billions: f64) -> MoneyCaps {
    let replacement = if ceiling_billions >= 1.0 {
        format!("${} billion", format_amount(ceiling_billions))
    } else {
        format!("${}M", format_amount(ceiling_billions * 1000.0))
    };
    MoneyCaps {
        millions_limit: ceiling_billions * 1000.0,
        millions_replacement: replacement.clone(),
        billions_limit: ceiling_billions,
        billions_replacement: replacement,
    }
}

fn money_caps(scale: BusinessScale, field: MoneyField, limits: &ScaleLimits) -> MoneyCaps {
    match (scale, field) {
        (BusinessScale::LocalSmb, MoneyField::Revenue) => caps(5.0, "$5M", 0.01, "$10M"),
        (BusinessScale::LocalSmb, MoneyField::Funding) => caps(0.5, "$500K", 0.001, "$1M"),
        (BusinessScale::Regional, MoneyField::Revenue) => caps(25.0, "$25M", 0.05, "$50M"),
        (BusinessScale::Regional, MoneyField::Funding) => caps(5.0, "$5M", 0.01, "$10M"),
        (_, MoneyField::Revenue) => derived_caps(limits.max_revenue),
        (_, MoneyField::Funding) => derived_caps(limits.max_revenue / 5.0),
    }
}

/// Clamp dollar figures in revenue or funding prose to scale-appropriate
/// ceilings. In-range mentions keep their original text.
pub fn clamp_funding_figures(
    text: &str,
    scale: BusinessScale,
    field: MoneyField,
    limits: &ScaleLimits,
) -> String {
    let caps = money_caps(scale, field, limits);

    let out = DOLLAR_MILLIONS.replace_all(text, |c: &regex::Captures| {
        match c[1].parse::<f64>() {
            Ok(value) if value > caps.millions_limit => caps.millions_replacement.clone(),
            _ => c[0].to_string(),
        }
    });
    DOLLAR_BILLION
        .replace_all(&out, |c: &regex::Captures| match c[1].parse::<f64>() {
            Ok(value) if value > caps.billions_limit => caps.billions_replacement.clone(),
            _ => c[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::limits::get_market_size_limits;

    #[test]
    fn test_trillion_claim_rewritten() {
        assert_eq!(
            clamp_market_size("$10 trillion market opportunity", 0.5, 0.1),
            "$0.1 billion market opportunity"
        );
    }

    #[test]
    fn test_within_limit_unchanged() {
        // twenty billion parses to 20, not strictly greater than 50
        assert_eq!(
            clamp_market_size("The TAM is twenty billion dollars", 50.0, 20.0),
            "The TAM is twenty billion dollars"
        );
    }

    #[test]
    fn test_exactly_at_limit_unchanged() {
        let text = "a $50 billion market";
        assert_eq!(clamp_market_size(text, 50.0, 20.0), text);
    }

    #[test]
    fn test_just_over_limit_rewritten() {
        assert_eq!(
            clamp_market_size("a $50.01 billion market", 50.0, 20.0),
            "a $20 billion market"
        );
    }

    #[test]
    fn test_no_magnitude_round_trips() {
        let text = "A strong team with deep domain experience.";
        assert_eq!(clamp_market_size(text, 0.5, 0.1), text);
    }

    #[test]
    fn test_all_notations_rewritten_together() {
        let text = "TAM of $2 trillion, also described as USD 2,000,000,000,000 \
                    or two trillion";
        let out = clamp_market_size(text, 50.0, 20.0);
        assert!(!out.contains("trillion"), "out: {out}");
        assert!(!out.contains("2,000"), "out: {out}");
        assert!(out.contains("$20 billion"), "out: {out}");
    }

    #[test]
    fn test_clamps_compliant_mention_alongside_inflated_one() {
        // Both mentions share the dollar-billion notation; once the $900B
        // claim trips the limit, the in-range $5B is rewritten too.
        let out = clamp_market_size("$900 billion TAM with a $5 billion SAM", 50.0, 20.0);
        assert_eq!(out, "$20 billion TAM with a $20 billion SAM");
    }

    #[test]
    fn test_sanitization_idempotent() {
        let once = clamp_market_size("a $900 billion market", 50.0, 20.0);
        let twice = clamp_market_size(&once, 50.0, 20.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_bare_mention_stays_unprefixed() {
        assert_eq!(
            clamp_market_size("roughly 80 billion in global spend", 50.0, 20.0),
            "roughly 20 billion in global spend"
        );
    }

    #[test]
    fn test_growth_rate_tiers() {
        assert_eq!(
            clamp_growth_rates("projected growth of 120% annually"),
            "projected growth of 15% annually"
        );
        assert_eq!(clamp_growth_rates("growing 85% a year"), "growing 25% a year");
        assert_eq!(clamp_growth_rates("a 55% CAGR"), "a 35% CAGR");
        assert_eq!(clamp_growth_rates("steady 12% growth"), "steady 12% growth");
    }

    #[test]
    fn test_local_funding_ask_capped() {
        let limits = get_market_size_limits(BusinessScale::LocalSmb, "Food & Delivery");
        assert_eq!(
            clamp_funding_figures(
                "$75M in funding requested",
                BusinessScale::LocalSmb,
                MoneyField::Funding,
                &limits
            ),
            "$500K in funding requested"
        );
    }

    #[test]
    fn test_local_revenue_capped() {
        let limits = get_market_size_limits(BusinessScale::LocalSmb, "");
        assert_eq!(
            clamp_funding_figures(
                "$500M revenue by year five, then $2 billion",
                BusinessScale::LocalSmb,
                MoneyField::Revenue,
                &limits
            ),
            "$5M revenue by year five, then $10M"
        );
    }

    #[test]
    fn test_regional_caps() {
        let limits = get_market_size_limits(BusinessScale::Regional, "");
        assert_eq!(
            clamp_funding_figures(
                "$120M revenue and a $1 billion exit",
                BusinessScale::Regional,
                MoneyField::Revenue,
                &limits
            ),
            "$25M revenue and a $50M exit"
        );
        assert_eq!(
            clamp_funding_figures(
                "raising $40M",
                BusinessScale::Regional,
                MoneyField::Funding,
                &limits
            ),
            "raising $5M"
        );
    }

    #[test]
    fn test_in_range_figures_kept() {
        let limits = get_market_size_limits(BusinessScale::Regional, "");
        assert_eq!(
            clamp_funding_figures(
                "$12M revenue in year two",
                BusinessScale::Regional,
                MoneyField::Revenue,
                &limits
            ),
            "$12M revenue in year two"
        );
    }

    #[test]
    fn test_global_caps_derive_from_max_revenue() {
        let limits = get_market_size_limits(BusinessScale::GlobalSaas, "Technology");
        // max_revenue = 2.0 for global technology
        assert_eq!(
            clamp_funding_figures(
                "$9 billion ARR",
                BusinessScale::GlobalSaas,
                MoneyField::Revenue,
                &limits
            ),
            "$2 billion ARR"
        );
        // funding ceiling is a fifth of max revenue: 0.4B -> $400M
        assert_eq!(
            clamp_funding_figures(
                "seeking $3 billion",
                BusinessScale::GlobalSaas,
                MoneyField::Funding,
                &limits
            ),
            "seeking $400M"
        );
    }

    #[test]
    fn test_amount_formatting() {
        assert_eq!(format_amount(0.1), "0.1");
        assert_eq!(format_amount(20.0), "20");
        assert_eq!(format_amount(2.5), "2.5");
    }
}
