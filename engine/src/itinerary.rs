//! Itinerary construction
//!
//! Allocates catalog attractions into a fixed number of days. Attractions
//! matching the traveler's interests sort first (cheapest within each group);
//! the pace determines how many blocks fit in a day. Days beyond the
//! available supply stay empty and render later as free days.

use crate::catalog::CatalogStore;
use sdk::errors::PlannerError;
use sdk::types::{Attraction, Constraints, Itinerary, ItineraryDay};
use tracing::warn;

/// True when the attraction's tag contains any interest as a
/// case-insensitive substring
fn matches_interests(attraction: &Attraction, interests: &[String]) -> bool {
    let tag = attraction.tag.to_lowercase();
    interests
        .iter()
        .any(|interest| tag.contains(&interest.to_lowercase()))
}

/// Build a day-by-day itinerary for the selected city
///
/// The sorted attraction list is consumed greedily in a single forward pass:
/// each day fills to the pace capacity before the next day starts. Both
/// sorts are stable, so equal keys keep catalog row order. A city with no
/// attraction records degrades to all-free days rather than failing.
pub fn build(
    catalog: &dyn CatalogStore,
    city: &str,
    constraints: &Constraints,
) -> Result<Itinerary, PlannerError> {
    let mut attractions = catalog.attractions(city)?;

    if attractions.is_empty() {
        warn!(city, "No attraction records; itinerary will be all free days");
    }

    if constraints.interests.is_empty() {
        attractions.sort_by(|a, b| a.cost_est.total_cmp(&b.cost_est));
    } else {
        attractions.sort_by(|a, b| {
            let a_match = matches_interests(a, &constraints.interests);
            let b_match = matches_interests(b, &constraints.interests);
            b_match
                .cmp(&a_match)
                .then(a.cost_est.total_cmp(&b.cost_est))
        });
    }

    let capacity = constraints.pace.blocks_per_day();
    let mut items = attractions.into_iter();

    let plan = (1..=constraints.days)
        .map(|day| ItineraryDay {
            day,
            items: items.by_ref().take(capacity).collect(),
        })
        .collect();

    Ok(Itinerary {
        city: city.to_string(),
        days: constraints.days,
        pace: constraints.pace,
        plan,
    })
}
