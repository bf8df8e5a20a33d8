//! Budget estimation
//!
//! Pure cost arithmetic: the base estimate (lodging, food, local transport,
//! flights), the activity cost of an itinerary, and the combined breakdown.
//! All amounts are rounded to 2 decimals.

use sdk::types::{BudgetBreakdown, Destination, Itinerary};
use serde::{Deserialize, Serialize};

/// Base trip estimate, excluding activities
///
/// `total_est` doubles as the "rough total" used to compare destination
/// concepts before an itinerary exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseEstimate {
    pub lodging: f64,
    pub food: f64,
    pub local_transport: f64,
    pub flights_est: f64,
    pub total_est: f64,
}

/// Round to 2 decimal places
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Estimate the base trip cost for a destination
///
/// Lodging covers nights, one fewer than the day count: a single-day trip
/// has zero overnight cost. Food and local transport scale with both days
/// and travelers; flights scale with travelers only.
pub fn estimate_base(
    destination: &Destination,
    days: u32,
    travelers: u32,
    flight_est_per_person: f64,
) -> BaseEstimate {
    let nights = days.saturating_sub(1);
    let lodging = round2(destination.avg_lodging_per_night * f64::from(nights));
    let food = round2(destination.avg_food_per_day * f64::from(days) * f64::from(travelers));
    let local_transport =
        round2(destination.avg_local_transport_per_day * f64::from(days) * f64::from(travelers));
    let flights_est = round2(flight_est_per_person * f64::from(travelers));

    // Total over the rounded components, so the breakdown sum identity
    // holds exactly
    let total_est = round2(lodging + food + local_transport + flights_est);

    BaseEstimate {
        lodging,
        food,
        local_transport,
        flights_est,
        total_est,
    }
}

/// Sum of cost estimates across every item of every day
///
/// Idempotent: the itinerary is not modified, so repeated calls yield the
/// same value.
pub fn activity_cost(itinerary: &Itinerary) -> f64 {
    let total: f64 = itinerary
        .plan
        .iter()
        .flat_map(|day| day.items.iter())
        .map(|item| item.cost_est)
        .sum();

    round2(total)
}

/// Combine a base estimate and an activity cost into the full breakdown
pub fn breakdown(base: &BaseEstimate, activities_est: f64, budget: f64) -> BudgetBreakdown {
    let grand_total_est = round2(base.total_est + activities_est);

    BudgetBreakdown {
        lodging: base.lodging,
        food: base.food,
        local_transport: base.local_transport,
        flights_est: base.flights_est,
        total_est: base.total_est,
        activities_est,
        grand_total_est,
        within_budget: grand_total_est <= budget,
    }
}
