use proptest::prelude::*;
use sdk::types::{Attraction, Constraints, Destination, Itinerary, ItineraryDay, Pace};
use wayfarer_engine::{adjuster, budget};

fn destination(lodging: f64, food: f64, transport: f64) -> Destination {
    Destination {
        city: "Alpha".to_string(),
        country: "Testland".to_string(),
        region: "europe".to_string(),
        style_tags: vec!["food".to_string()],
        avg_lodging_per_night: lodging,
        avg_food_per_day: food,
        avg_local_transport_per_day: transport,
    }
}

fn itinerary_from_costs(costs: &[Vec<f64>]) -> Itinerary {
    Itinerary {
        city: "Alpha".to_string(),
        days: costs.len() as u32,
        pace: Pace::Medium,
        plan: costs
            .iter()
            .enumerate()
            .map(|(i, day_costs)| ItineraryDay {
                day: i as u32 + 1,
                items: day_costs
                    .iter()
                    .map(|&cost| Attraction {
                        city: "Alpha".to_string(),
                        name: format!("A{}", cost),
                        tag: "food".to_string(),
                        typical_hours: 2.0,
                        cost_est: cost,
                    })
                    .collect(),
            })
            .collect(),
    }
}

// Property: the budget breakdown is always the exact sum of its components
// (within 2-decimal rounding), and the within_budget flag always reports the
// true comparison.
proptest! {
    #[test]
    fn test_breakdown_sum_identity(
        lodging_rate in 0.0..500.0f64,
        food_rate in 0.0..150.0f64,
        transport_rate in 0.0..50.0f64,
        flight in 0.0..2000.0f64,
        days in 1..30u32,
        travelers in 1..8u32,
        activities in 0.0..1000.0f64,
        budget_limit in 0.0..20000.0f64,
    ) {
        let base = budget::estimate_base(
            &destination(lodging_rate, food_rate, transport_rate),
            days,
            travelers,
            flight,
        );
        let activities = budget::round2(activities);
        let b = budget::breakdown(&base, activities, budget_limit);

        let sum = budget::round2(
            b.lodging + b.food + b.local_transport + b.flights_est + b.activities_est,
        );
        prop_assert!((b.grand_total_est - sum).abs() < 0.011);
        prop_assert_eq!(b.within_budget, b.grand_total_est <= budget_limit);
    }
}

// Property: a single-day trip never pays for lodging, whatever the rates.
proptest! {
    #[test]
    fn test_one_day_trip_has_zero_lodging(
        lodging_rate in 0.0..1000.0f64,
        travelers in 1..8u32,
    ) {
        let base = budget::estimate_base(
            &destination(lodging_rate, 40.0, 10.0),
            1,
            travelers,
            450.0,
        );
        prop_assert_eq!(base.lodging, 0.0);
    }
}

// Property: after trimming, retained paid activities never exceed the cap,
// no free item is ever removed, and the day count is unchanged.
proptest! {
    #[test]
    fn test_trim_cap_and_free_item_invariants(
        day_costs in prop::collection::vec(
            prop::collection::vec(0.0..100.0f64, 0..5),
            1..8,
        ),
        cap in 0..5usize,
    ) {
        let original = itinerary_from_costs(&day_costs);
        let free_before = original
            .plan
            .iter()
            .flat_map(|d| d.items.iter())
            .filter(|i| !i.is_paid())
            .count();

        let trimmed = adjuster::trim(original.clone(), cap);

        prop_assert!(trimmed.paid_activity_count() <= cap);
        prop_assert_eq!(trimmed.plan.len(), original.plan.len());

        let free_after = trimmed
            .plan
            .iter()
            .flat_map(|d| d.items.iter())
            .filter(|i| !i.is_paid())
            .count();
        prop_assert_eq!(free_after, free_before);
    }
}

// Property: the cap tiers partition the overage axis exactly as documented.
proptest! {
    #[test]
    fn test_cap_tiers_partition_overage(overage in 0.0..5000.0f64) {
        let cap = adjuster::paid_activity_cap(overage);
        if overage > 500.0 {
            prop_assert_eq!(cap, 1);
        } else if overage > 250.0 {
            prop_assert_eq!(cap, 2);
        } else {
            prop_assert_eq!(cap, 3);
        }
    }
}

// Property: activity cost is idempotent and trimming never increases it.
proptest! {
    #[test]
    fn test_activity_cost_idempotent_and_monotone(
        day_costs in prop::collection::vec(
            prop::collection::vec(0.0..100.0f64, 0..5),
            1..8,
        ),
        cap in 0..5usize,
    ) {
        let itin = itinerary_from_costs(&day_costs);

        let first = budget::activity_cost(&itin);
        let second = budget::activity_cost(&itin);
        prop_assert_eq!(first, second);

        let trimmed = adjuster::trim(itin, cap);
        prop_assert!(budget::activity_cost(&trimmed) <= first);
    }
}

// Property: the itinerary builder always produces exactly `days` day
// records, with no day over capacity.
proptest! {
    #[test]
    fn test_itinerary_day_count_and_capacity(
        days in 1..15u32,
        attraction_count in 0..40usize,
        pace_index in 0..3usize,
    ) {
        use sdk::errors::PlannerError;
        use wayfarer_engine::catalog::CatalogStore;
        use wayfarer_engine::itinerary;

        struct FixedCatalog(Vec<Attraction>);

        impl CatalogStore for FixedCatalog {
            fn destinations(
                &self,
                _region: Option<sdk::types::Region>,
            ) -> Result<Vec<Destination>, PlannerError> {
                Ok(vec![])
            }

            fn attractions(&self, _city: &str) -> Result<Vec<Attraction>, PlannerError> {
                Ok(self.0.clone())
            }
        }

        let pace = Pace::ALL[pace_index];
        let catalog = FixedCatalog(
            (0..attraction_count)
                .map(|i| Attraction {
                    city: "Alpha".to_string(),
                    name: format!("A{}", i),
                    tag: "food".to_string(),
                    typical_hours: 2.0,
                    cost_est: i as f64,
                })
                .collect(),
        );
        let constraints = Constraints {
            days,
            pace,
            ..Constraints::default()
        };

        let itin = itinerary::build(&catalog, "Alpha", &constraints).unwrap();

        prop_assert_eq!(itin.plan.len(), days as usize);
        for day in &itin.plan {
            prop_assert!(day.items.len() <= pace.blocks_per_day());
        }

        let allocated: usize = itin.plan.iter().map(|d| d.items.len()).sum();
        let capacity = pace.blocks_per_day() * days as usize;
        prop_assert_eq!(allocated, attraction_count.min(capacity));
    }
}
