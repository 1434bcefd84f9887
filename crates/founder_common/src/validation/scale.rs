//! Business scale classification.
//!
//! Fast keyword classification (no LLM call) that decides how large a market
//! or funding claim may plausibly be for a venture:
//! - LocalSmb: single-site businesses (cafes, salons, restaurants)
//! - Regional: multi-location or franchise footprints
//! - National: country-wide reach without a software core
//! - GlobalSaas: software platforms selling worldwide
//!
//! Strong unambiguous signals are checked before the weighted keyword counts.
//! A coffee shop with a companion mobile app shares words like "app" and
//! "platform" with software companies and would otherwise score as one.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The four scale buckets used to bound financial claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessScale {
    LocalSmb,
    Regional,
    National,
    GlobalSaas,
}

impl BusinessScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LocalSmb => "local_smb",
            Self::Regional => "regional",
            Self::National => "national",
            Self::GlobalSaas => "global_saas",
        }
    }

    /// Human-readable label for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LocalSmb => "Local / Small Business",
            Self::Regional => "Regional",
            Self::National => "National",
            Self::GlobalSaas => "Global SaaS",
        }
    }
}

impl std::fmt::Display for BusinessScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keyword-driven scale classifier. The lists are data, not code: every rule
/// is a static string set, testable on its own.
pub struct ScaleClassifier {
    // Unambiguous single-site signals; any hit wins immediately
    strong_local_words: HashSet<&'static str>,
    strong_local_phrases: Vec<&'static str>,
    // Weighted indicator lists for the scoring stage
    local_keywords: HashSet<&'static str>,
    global_keywords: HashSet<&'static str>,
    regional_keywords: HashSet<&'static str>,
}

impl ScaleClassifier {
    pub fn new() -> Self {
        Self {
            strong_local_words: [
                "cafe", "café", "restaurant", "bar", "bakery", "salon", "diner",
                "bistro", "pub", "barbershop", "laundromat", "taqueria",
            ]
            .into_iter()
            .collect(),

            strong_local_phrases: vec![
                "coffee shop",
                "coffee roaster",
                "food truck",
                "hair salon",
                "nail salon",
                "ice cream",
                "yoga studio",
                "pilates studio",
            ],

            local_keywords: [
                // Strong signals count here too
                "cafe", "café", "restaurant", "bar", "bakery", "salon", "diner",
                "bistro", "pub", "barbershop", "laundromat", "taqueria",
                // Broader single-site vocabulary
                "shop", "store", "local", "neighborhood", "boutique", "studio",
                "storefront", "downtown", "community", "town", "family",
                "catering", "deli", "grocery", "florist", "gym", "spa",
                "tavern", "eatery", "kitchen",
            ]
            .into_iter()
            .collect(),

            global_keywords: [
                "saas", "software", "platform", "api", "cloud", "enterprise",
                "b2b", "subscription", "app", "ai", "analytics", "automation",
                "scalable", "global", "worldwide", "international",
                "marketplace", "digital", "infrastructure", "developer",
            ]
            .into_iter()
            .collect(),

            regional_keywords: [
                "regional", "franchise", "chain", "location", "branch",
                "expansion", "expand", "statewide", "metro", "multilocation",
                "territory", "district",
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Strip punctuation and fold simple plurals so "Roasters," matches
    /// "roaster".
    fn normalize_word(word: &str) -> String {
        let cleaned: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
        if cleaned.ends_with('s') && cleaned.len() > 3 {
            cleaned[..cleaned.len() - 1].to_string()
        } else {
            cleaned
        }
    }

    /// Map a venture to exactly one scale. Total over all inputs, including
    /// empty strings; deterministic and order-sensitive.
    pub fn classify(&self, title: &str, description: &str, industry: &str) -> BusinessScale {
        let text = format!("{} {}", title, description).to_lowercase();
        let words: Vec<String> = text.split_whitespace().map(Self::normalize_word).collect();
        let words_set: HashSet<&str> = words.iter().map(|s| s.as_str()).collect();

        // 1. Strong single-site signals override everything else.
        if self.strong_local_words.iter().any(|w| words_set.contains(w))
            || self.strong_local_phrases.iter().any(|p| text.contains(p))
        {
            return BusinessScale::LocalSmb;
        }

        // 2. Food businesses without a software angle stay local.
        if industry.eq_ignore_ascii_case("Food & Delivery")
            && !text.contains("saas")
            && !text.contains("software")
        {
            return BusinessScale::LocalSmb;
        }

        // 3. Weighted keyword counts.
        let local = words_set.intersection(&self.local_keywords).count();
        let global = words_set.intersection(&self.global_keywords).count();
        let regional = words_set.intersection(&self.regional_keywords).count();

        if local > 0 && global == 0 {
            BusinessScale::LocalSmb
        } else if global > local && global > regional {
            BusinessScale::GlobalSaas
        } else if regional > local {
            BusinessScale::Regional
        } else if local > 0 {
            BusinessScale::LocalSmb
        } else {
            Self::industry_fallback(industry)
        }
    }

    /// 4. Nothing matched: the industry label decides.
    fn industry_fallback(industry: &str) -> BusinessScale {
        if industry.eq_ignore_ascii_case("healthcare")
            || industry.eq_ignore_ascii_case("education")
        {
            BusinessScale::Regional
        } else if industry.eq_ignore_ascii_case("technology")
            || industry.eq_ignore_ascii_case("fintech")
        {
            BusinessScale::GlobalSaas
        } else {
            BusinessScale::National
        }
    }
}

impl Default for ScaleClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a venture with a fresh classifier. Pure and deterministic.
pub fn classify_business_scale(title: &str, description: &str, industry: &str) -> BusinessScale {
    ScaleClassifier::new().classify(title, description, industry)
}
