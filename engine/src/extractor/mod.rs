//! Free-text constraint extraction
//!
//! Pattern-matches a natural-language trip request into a structured
//! [`Constraints`] record. Extraction is isolated behind the
//! [`ConstraintExtractor`] trait so the decision pipeline is independent of
//! the extraction strategy.
//!
//! Every field the rules fail to detect falls back to a documented default,
//! so the pipeline never receives malformed or absent values.

use regex::Regex;
use sdk::types::{Constraints, Pace, Region};
use std::sync::OnceLock;

/// Interest vocabulary, scanned in this order; at most 3 matches are kept
const INTEREST_VOCABULARY: [&str; 13] = [
    "food",
    "museums",
    "nature",
    "walk",
    "history",
    "shopping",
    "architecture",
    "coastal",
    "scenic",
    "art",
    "nightlife",
    "markets",
    "roadtrip",
];

/// Calendar month names for the optional month hint
const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Maps free text to structured trip constraints
pub trait ConstraintExtractor {
    /// Extract constraints from a trip request. Infallible: undetected
    /// fields take their defaults.
    fn extract(&self, text: &str) -> Constraints;
}

/// Numeric extraction patterns, compiled once and reused
static DAYS_PATTERN: OnceLock<Regex> = OnceLock::new();
static BUDGET_PATTERN: OnceLock<Regex> = OnceLock::new();
static TRAVELERS_PATTERN: OnceLock<Regex> = OnceLock::new();

fn days_pattern() -> &'static Regex {
    DAYS_PATTERN.get_or_init(|| {
        // "5-day" or "5 day(s)"
        Regex::new(r"\b(\d{1,2})\s*-\s*day\b|\b(\d{1,2})\s*day\b").expect("Invalid days pattern")
    })
}

fn budget_pattern() -> &'static Regex {
    BUDGET_PATTERN.get_or_init(|| {
        // "budget $1800" or "under $1800", 3-6 digit amounts
        Regex::new(r"\bbudget\s*\$?\s*(\d{3,6})\b|\bunder\s*\$?\s*(\d{3,6})\b")
            .expect("Invalid budget pattern")
    })
}

fn travelers_pattern() -> &'static Regex {
    TRAVELERS_PATTERN.get_or_init(|| {
        Regex::new(r"\bfor\s+(\d{1,2})\s+(people|persons|travelers)\b")
            .expect("Invalid travelers pattern")
    })
}

/// Table-driven rule-based extractor
///
/// Reproduces the documented detection behavior: day count from "N-day" /
/// "N day", budget from "budget $N" / "under $N", traveler count from
/// "for N people/persons/travelers", region and pace from fixed vocabulary
/// membership, interests from [`INTEREST_VOCABULARY`] capped at 3, and a
/// month hint from the calendar month names.
pub struct RuleBasedExtractor {
    defaults: Constraints,
}

impl RuleBasedExtractor {
    /// Create an extractor with the given fallback constraints
    pub fn new(defaults: Constraints) -> Self {
        Self { defaults }
    }
}

impl Default for RuleBasedExtractor {
    fn default() -> Self {
        Self::new(Constraints::default())
    }
}

impl ConstraintExtractor for RuleBasedExtractor {
    fn extract(&self, text: &str) -> Constraints {
        let text = text.trim().to_lowercase();
        let mut constraints = self.defaults.clone();

        if let Some(days) = capture_number(days_pattern(), &text) {
            if days >= 1 {
                constraints.days = days;
            }
        }

        if let Some(budget) = capture_number(budget_pattern(), &text) {
            constraints.budget = f64::from(budget);
        }

        if let Some(captures) = travelers_pattern().captures(&text) {
            if let Some(travelers) = captures.get(1).and_then(|m| m.as_str().parse::<u32>().ok())
            {
                if travelers >= 1 {
                    constraints.travelers = travelers;
                }
            }
        }

        // First vocabulary hit wins for region and pace
        for region in Region::ALL {
            if text.contains(region.as_str()) {
                constraints.region = Some(region);
                break;
            }
        }

        for pace in Pace::ALL {
            if text.contains(pace.as_str()) {
                constraints.pace = pace;
                break;
            }
        }

        let interests: Vec<String> = INTEREST_VOCABULARY
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .take(3)
            .map(|keyword| keyword.to_string())
            .collect();
        if !interests.is_empty() {
            constraints.interests = interests;
        }

        for month in MONTHS {
            if text.contains(month) {
                constraints.month_hint = Some(title_case(month));
                break;
            }
        }

        constraints
    }
}

/// First numeric capture group of the first match, across alternations
fn capture_number(pattern: &Regex, text: &str) -> Option<u32> {
    let captures = pattern.captures(text)?;
    captures
        .iter()
        .skip(1)
        .flatten()
        .next()
        .and_then(|m| m.as_str().parse().ok())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
