//! Currency magnitude extraction.
//!
//! The generator writes the same market-size concept in many surface forms:
//! "$1.2T", "USD 900 billion", "ten billion dollars", "2,500,000,000". One
//! regex cannot cover them all, so each notation gets its own pass and the
//! largest value wins. Taking the maximum guards against a later, smaller
//! mention masking an earlier overstatement. Values normalize to billions.

use regex::Regex;
use std::sync::LazyLock;

/// `$5T`, `$1.2 trillion`
pub(crate) static DOLLAR_TRILLION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\$\s*(\d+(?:\.\d+)?)\s*(?:trillion\b|tn\b|t\b)").unwrap());

/// `$3B`, `$3 bn`, `$2.5 billion`
pub(crate) static DOLLAR_BILLION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\$\s*(\d+(?:\.\d+)?)\s*(?:billion\b|bn\b|b\b)").unwrap());

/// `40 billion` / `40bn` with no currency prefix
pub(crate) static BARE_BILLION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*(?:billion|bn)\b").unwrap());

/// `USD 12 billion`, `US$ 3 trillion`
pub(crate) static USD_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:usd|us\$)\s*(\d+(?:\.\d+)?)\s*(trillion|billion|bn)\b").unwrap()
});

/// Raw grouped-digit dollar figures: `$1,200,000,000` or bare
/// `9,000,000,000` (at least three comma groups).
pub(crate) static RAW_DOLLARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?\d{1,3}(?:,\d{3}){3,}").unwrap());

const NUMBER_WORDS: &str = "one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|\
thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty|thirty|forty|fifty|\
sixty|seventy|eighty|ninety|hundred|thousand";

/// Written-out amounts: `ten billion`, `two hundred fifty billion`,
/// `one trillion`.
pub(crate) static WORD_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b((?:{words})(?:[\s-]+(?:{words}))*)\s+(billion|trillion)\b",
        words = NUMBER_WORDS
    ))
    .unwrap()
});

fn number_word_value(word: &str) -> Option<f64> {
    let value = match word {
        "one" => 1.0,
        "two" => 2.0,
        "three" => 3.0,
        "four" => 4.0,
        "five" => 5.0,
        "six" => 6.0,
        "seven" => 7.0,
        "eight" => 8.0,
        "nine" => 9.0,
        "ten" => 10.0,
        "eleven" => 11.0,
        "twelve" => 12.0,
        "thirteen" => 13.0,
        "fourteen" => 14.0,
        "fifteen" => 15.0,
        "sixteen" => 16.0,
        "seventeen" => 17.0,
        "eighteen" => 18.0,
        "nineteen" => 19.0,
        "twenty" => 20.0,
        "thirty" => 30.0,
        "forty" => 40.0,
        "fifty" => 50.0,
        "sixty" => 60.0,
        "seventy" => 70.0,
        "eighty" => 80.0,
        "ninety" => 90.0,
        _ => return None,
    };
    Some(value)
}

/// Evaluate a captured word sequence: additive small words, multiplicative
/// "hundred"/"thousand" ("two hundred fifty" -> 250).
fn parse_number_words(phrase: &str) -> f64 {
    let mut value = 0.0;
    for word in phrase
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
    {
        match word.to_lowercase().as_str() {
            "hundred" => value = if value == 0.0 { 100.0 } else { value * 100.0 },
            "thousand" => value = if value == 0.0 { 1000.0 } else { value * 1000.0 },
            w => value += number_word_value(w).unwrap_or(0.0),
        }
    }
    value
}

fn consider(best: &mut Option<f64>, candidate: f64) {
    if candidate > 0.0 {
        *best = Some(best.map_or(candidate, |b: f64| b.max(candidate)));
    }
}

/// The largest currency magnitude referenced anywhere in `text`, in
/// billions. `None` means no magnitude was found; this never fails.
pub fn largest_magnitude_billions(text: &str) -> Option<f64> {
    let mut best: Option<f64> = None;

    for caps in DOLLAR_TRILLION.captures_iter(text) {
        if let Ok(value) = caps[1].parse::<f64>() {
            consider(&mut best, value * 1000.0);
        }
    }
    for caps in DOLLAR_BILLION.captures_iter(text) {
        if let Ok(value) = caps[1].parse::<f64>() {
            consider(&mut best, value);
        }
    }
    for caps in BARE_BILLION.captures_iter(text) {
        if let Ok(value) = caps[1].parse::<f64>() {
            consider(&mut best, value);
        }
    }
    for caps in USD_AMOUNT.captures_iter(text) {
        if let Ok(value) = caps[1].parse::<f64>() {
            let multiplier = if caps[2].eq_ignore_ascii_case("trillion") {
                1000.0
            } else {
                1.0
            };
            consider(&mut best, value * multiplier);
        }
    }
    for found in RAW_DOLLARS.find_iter(text) {
        let digits: String = found
            .as_str()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if let Ok(raw) = digits.parse::<f64>() {
            if raw >= 1_000_000_000.0 {
                consider(&mut best, raw / 1_000_000_000.0);
            }
        }
    }
    for caps in WORD_AMOUNT.captures_iter(text) {
        let value = parse_number_words(&caps[1]);
        let multiplier = if caps[2].eq_ignore_ascii_case("trillion") {
            1000.0
        } else {
            1.0
        };
        consider(&mut best, value * multiplier);
    }

    best
}
