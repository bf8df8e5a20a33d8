//! Trip-planning data model
//!
//! Shared record types flowing through the planning pipeline. Catalog records
//! (`Destination`, `Attraction`) are read-only once loaded; derived records
//! (`TripConcept`, `Itinerary`, `BudgetBreakdown`) are owned by a single
//! pipeline run and never shared across runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic region filter for destination search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Europe,
    Asia,
    Americas,
}

impl Region {
    /// All known regions, in extraction vocabulary order
    pub const ALL: [Region; 3] = [Region::Europe, Region::Asia, Region::Americas];

    /// Lowercase name as it appears in catalog datasets
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Europe => "europe",
            Region::Asia => "asia",
            Region::Americas => "americas",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "europe" => Ok(Region::Europe),
            "asia" => Ok(Region::Asia),
            "americas" => Ok(Region::Americas),
            other => Err(format!("unknown region '{}'", other)),
        }
    }
}

/// Qualitative itinerary density, mapped to attraction blocks per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Pace {
    /// All known paces, in extraction vocabulary order
    pub const ALL: [Pace; 3] = [Pace::Slow, Pace::Medium, Pace::Fast];

    /// Number of attraction blocks allocated per itinerary day
    pub fn blocks_per_day(&self) -> usize {
        match self {
            Pace::Slow => 2,
            Pace::Medium => 3,
            Pace::Fast => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Slow => "slow",
            Pace::Medium => "medium",
            Pace::Fast => "fast",
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slow" => Ok(Pace::Slow),
            "medium" => Ok(Pace::Medium),
            "fast" => Ok(Pace::Fast),
            other => Err(format!("unknown pace '{}'", other)),
        }
    }
}

/// Structured trip constraints
///
/// Produced once by the constraint extractor and immutable thereafter.
/// The `Default` impl carries the documented fallback for every field the
/// extractor fails to detect, so the pipeline never sees malformed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraints {
    /// Departure city
    pub origin: String,

    /// Trip length in days (always >= 1)
    pub days: u32,

    /// Number of travelers (always >= 1)
    pub travelers: u32,

    /// Total budget in dollars
    pub budget: f64,

    /// Optional region preference
    pub region: Option<Region>,

    /// Itinerary density
    pub pace: Pace,

    /// Up to 3 interest tags, in detection order
    pub interests: Vec<String>,

    /// Optional month name, title-cased
    pub month_hint: Option<String>,

    /// Placeholder per-person flight estimate
    pub flight_est_per_person: f64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            origin: "Boston".to_string(),
            days: 5,
            travelers: 2,
            budget: 2000.0,
            region: None,
            pace: Pace::Medium,
            interests: vec!["food".to_string(), "museums".to_string()],
            month_hint: None,
            flight_est_per_person: 450.0,
        }
    }
}

/// Destination record from the read-only travel catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub city: String,
    pub country: String,
    /// Region name, matched case-insensitively against [`Region`]
    pub region: String,
    /// Lowercase style tags
    pub style_tags: Vec<String>,
    pub avg_lodging_per_night: f64,
    pub avg_food_per_day: f64,
    pub avg_local_transport_per_day: f64,
}

/// Attraction record from the read-only travel catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub city: String,
    pub name: String,
    pub tag: String,
    pub typical_hours: f64,
    pub cost_est: f64,
}

impl Attraction {
    /// A paid activity has a positive cost estimate
    pub fn is_paid(&self) -> bool {
        self.cost_est > 0.0
    }
}

/// A ranked trip idea produced during destination selection. Ephemeral:
/// lives only between the propose and choose stages of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripConcept {
    pub title: String,
    pub city: String,
    pub rationale: String,
    pub destination: Destination,
}

/// One itinerary day with its allocated attraction blocks
///
/// An empty `items` list is a free exploration / rest day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    pub items: Vec<Attraction>,
}

impl ItineraryDay {
    pub fn is_free_day(&self) -> bool {
        self.items.is_empty()
    }
}

/// Day-by-day itinerary for the selected city
///
/// Invariant: `plan.len() == days`, including trailing free days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub city: String,
    pub days: u32,
    pub pace: Pace,
    pub plan: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Total number of paid activities across all days
    pub fn paid_activity_count(&self) -> usize {
        self.plan
            .iter()
            .flat_map(|day| day.items.iter())
            .filter(|item| item.is_paid())
            .count()
    }
}

/// Deterministic cost breakdown for one trip
///
/// All amounts are rounded to 2 decimals. `total_est` is the base total
/// excluding activities; `grand_total_est` includes them. Invariant:
/// `grand_total_est == lodging + food + local_transport + flights_est +
/// activities_est` within rounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub lodging: f64,
    pub food: f64,
    pub local_transport: f64,
    pub flights_est: f64,
    /// Base total excluding activities; held fixed across adjustment
    pub total_est: f64,
    pub activities_est: f64,
    pub grand_total_est: f64,
    pub within_budget: bool,
}
