//! Over-budget itinerary adjustment
//!
//! When the estimated grand total exceeds the stated budget, the adjuster
//! trims paid activities under a tiered cap and the budget is recomputed
//! from the trimmed itinerary. The pass is single-shot: it is never
//! re-applied, and the final within_budget flag reports the true comparison
//! even if the trimmed total is still over.

use crate::budget::{self, BaseEstimate};
use sdk::types::{BudgetBreakdown, Itinerary};
use tracing::info;

/// Paid-activity cap for a given overage, in dollars over budget
///
/// Larger overages allow fewer paid activities: over 500 keeps 1, over 250
/// keeps 2, anything smaller keeps 3.
pub fn paid_activity_cap(overage: f64) -> usize {
    if overage > 500.0 {
        1
    } else if overage > 250.0 {
        2
    } else {
        3
    }
}

/// Trim paid activities beyond the cap, keeping every free item
///
/// A single forward pass over days in order: free items (cost_est <= 0) are
/// always retained; paid items are retained until a running global counter
/// reaches the cap, after which all further paid items in all subsequent
/// days are dropped.
pub fn trim(mut itinerary: Itinerary, max_paid_activities: usize) -> Itinerary {
    let mut paid_seen = 0;

    for day in &mut itinerary.plan {
        day.items.retain(|item| {
            if !item.is_paid() {
                return true;
            }
            if paid_seen < max_paid_activities {
                paid_seen += 1;
                true
            } else {
                false
            }
        });
    }

    itinerary
}

/// Apply the over-budget remediation and recompute the breakdown
///
/// Lodging, food, local transport, and flights are held fixed from the
/// prior breakdown; only the activity component changes.
pub fn adjust(
    itinerary: Itinerary,
    prior: &BudgetBreakdown,
    budget_limit: f64,
) -> (Itinerary, BudgetBreakdown, usize) {
    let overage = prior.grand_total_est - budget_limit;
    let cap = paid_activity_cap(overage);

    info!(
        overage = budget::round2(overage),
        cap, "Trimming paid activities to fit budget"
    );

    let trimmed = trim(itinerary, cap);

    let base = BaseEstimate {
        lodging: prior.lodging,
        food: prior.food,
        local_transport: prior.local_transport,
        flights_est: prior.flights_est,
        total_est: prior.total_est,
    };
    let activities = budget::activity_cost(&trimmed);
    let recomputed = budget::breakdown(&base, activities, budget_limit);

    (trimmed, recomputed, cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdk::types::{Attraction, Destination, ItineraryDay, Pace};

    fn item(name: &str, cost: f64) -> Attraction {
        Attraction {
            city: "Alpha".to_string(),
            name: name.to_string(),
            tag: "food".to_string(),
            typical_hours: 2.0,
            cost_est: cost,
        }
    }

    fn itinerary(day_items: Vec<Vec<Attraction>>) -> Itinerary {
        let days = day_items.len() as u32;
        Itinerary {
            city: "Alpha".to_string(),
            days,
            pace: Pace::Medium,
            plan: day_items
                .into_iter()
                .enumerate()
                .map(|(i, items)| ItineraryDay {
                    day: i as u32 + 1,
                    items,
                })
                .collect(),
        }
    }

    #[test]
    fn test_cap_tiers() {
        assert_eq!(paid_activity_cap(600.0), 1);
        assert_eq!(paid_activity_cap(500.0), 2); // boundary: not strictly over 500
        assert_eq!(paid_activity_cap(300.0), 2);
        assert_eq!(paid_activity_cap(250.0), 3);
        assert_eq!(paid_activity_cap(100.0), 3);
    }

    #[test]
    fn test_trim_keeps_free_items_everywhere() {
        let itin = itinerary(vec![
            vec![item("Paid1", 10.0), item("Free1", 0.0)],
            vec![item("Paid2", 20.0), item("Free2", 0.0)],
        ]);
        let trimmed = trim(itin, 0);

        let names: Vec<&str> = trimmed
            .plan
            .iter()
            .flat_map(|d| d.items.iter())
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Free1", "Free2"]);
    }

    #[test]
    fn test_trim_counter_is_global_across_days() {
        let itin = itinerary(vec![
            vec![item("Paid1", 10.0), item("Paid2", 10.0)],
            vec![item("Paid3", 10.0)],
            vec![item("Paid4", 10.0)],
        ]);
        let trimmed = trim(itin, 3);

        assert_eq!(trimmed.paid_activity_count(), 3);
        assert!(trimmed.plan[2].items.is_empty());
    }

    #[test]
    fn test_trim_preserves_day_count() {
        let itin = itinerary(vec![vec![item("Paid", 10.0)], vec![], vec![]]);
        let trimmed = trim(itin, 0);
        assert_eq!(trimmed.plan.len(), 3);
    }

    #[test]
    fn test_adjust_overage_350_caps_at_two() {
        // Budget 1000, grand total 1350: overage 350 allows 2 paid items.
        // The recomputed total must not exceed the prior one and the flag
        // must report the honest comparison.
        let destination = Destination {
            city: "Alpha".to_string(),
            country: "Testland".to_string(),
            region: "europe".to_string(),
            style_tags: vec!["food".to_string()],
            avg_lodging_per_night: 62.5,
            avg_food_per_day: 40.0,
            avg_local_transport_per_day: 10.0,
        };
        let base = budget::estimate_base(&destination, 5, 2, 100.0);
        // base: lodging 250 + food 400 + transport 100 + flights 200 = 950
        assert_eq!(base.total_est, 950.0);

        let itin = itinerary(vec![
            vec![item("A", 100.0), item("B", 150.0)],
            vec![item("C", 150.0), item("Free", 0.0)],
        ]);
        let prior = budget::breakdown(&base, budget::activity_cost(&itin), 1000.0);
        assert_eq!(prior.grand_total_est, 1350.0);
        assert!(!prior.within_budget);

        let (trimmed, recomputed, cap) = adjust(itin, &prior, 1000.0);
        assert_eq!(cap, 2);
        assert_eq!(trimmed.paid_activity_count(), 2);
        assert!(recomputed.grand_total_est <= prior.grand_total_est);
        assert_eq!(
            recomputed.within_budget,
            recomputed.grand_total_est <= 1000.0
        );
        // Free item survives
        assert!(trimmed.plan[1].items.iter().any(|i| i.name == "Free"));
        // Base components are held fixed
        assert_eq!(recomputed.lodging, prior.lodging);
        assert_eq!(recomputed.flights_est, prior.flights_est);
        assert_eq!(recomputed.total_est, prior.total_est);
    }

    #[test]
    fn test_adjust_can_honestly_remain_over_budget() {
        // Base cost alone exceeds the budget: trimming every paid activity
        // still leaves the trip over, and the flag says so.
        let destination = Destination {
            city: "Alpha".to_string(),
            country: "Testland".to_string(),
            region: "europe".to_string(),
            style_tags: vec![],
            avg_lodging_per_night: 300.0,
            avg_food_per_day: 80.0,
            avg_local_transport_per_day: 20.0,
        };
        let base = budget::estimate_base(&destination, 5, 2, 450.0);
        let itin = itinerary(vec![vec![item("A", 700.0), item("B", 650.0)]]);
        let prior = budget::breakdown(&base, budget::activity_cost(&itin), 1000.0);

        let (_, recomputed, cap) = adjust(itin, &prior, 1000.0);
        assert_eq!(cap, 1);
        assert!(!recomputed.within_budget);
    }
}
