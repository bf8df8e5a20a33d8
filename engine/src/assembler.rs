//! Final plan assembly
//!
//! Pure rendering of the constraints, selected destination, itinerary,
//! budget, and preparation checklist into a human-readable markdown plan.
//! Inputs are never mutated; day and item ordering is preserved exactly.

use sdk::types::{BudgetBreakdown, Constraints, Destination, Itinerary};
use std::fmt::Write;

/// Marker rendered for a day with no allocated items
const FREE_DAY_MARKER: &str = "Free exploration / rest day";

/// Fixed preparation checklist, parameterized by the trip constraints
///
/// Deterministic text generation, not data-driven: always 7 reminders.
pub fn checklist(constraints: &Constraints, destination: &Destination) -> Vec<String> {
    vec![
        format!(
            "Confirm travel dates and time off for {} days",
            constraints.days
        ),
        format!(
            "Book flights to {} (compare 2-3 options)",
            destination.city
        ),
        "Book lodging near a transit-friendly area".to_string(),
        "Save key attractions to a map list".to_string(),
        "Set a daily spend cap and track expenses".to_string(),
        "Prepare documents (passport/ID, cards, insurance as needed)".to_string(),
        "Build a backup plan (weather / closures / fatigue day)".to_string(),
    ]
}

/// Render the complete vacation plan as markdown
pub fn render(
    constraints: &Constraints,
    destination: &Destination,
    itinerary: &Itinerary,
    budget: &BudgetBreakdown,
    checklist: &[String],
) -> String {
    let interest_text = if constraints.interests.is_empty() {
        "general".to_string()
    } else {
        constraints.interests.join(", ")
    };
    let region_text = constraints
        .region
        .map(|r| r.to_string())
        .unwrap_or_else(|| "any".to_string());

    let mut plan = String::new();

    let _ = writeln!(plan, "## Vacation Plan");
    let _ = writeln!(
        plan,
        "**Destination:** {}, {}  ",
        destination.city, destination.country
    );
    let _ = writeln!(plan, "**Region preference:** {}  ", region_text);
    let _ = writeln!(
        plan,
        "**Length:** {} days | **Travelers:** {}  ",
        constraints.days, constraints.travelers
    );
    let _ = writeln!(
        plan,
        "**Pace:** {} | **Interests:** {}",
        constraints.pace, interest_text
    );
    plan.push('\n');

    let _ = writeln!(plan, "### Budget (estimates)");
    let _ = writeln!(plan, "- Flights: ${}", budget.flights_est);
    let _ = writeln!(plan, "- Lodging: ${}", budget.lodging);
    let _ = writeln!(plan, "- Food: ${}", budget.food);
    let _ = writeln!(plan, "- Local transport: ${}", budget.local_transport);
    let _ = writeln!(plan, "- Activities: ${}", budget.activities_est);
    let _ = writeln!(
        plan,
        "- **Grand total:** ${} (Budget: ${})  ",
        budget.grand_total_est, constraints.budget
    );
    let _ = writeln!(plan, "- **Within budget:** {}", budget.within_budget);
    plan.push('\n');

    let _ = writeln!(plan, "### Day-by-day itinerary");
    for day in &itinerary.plan {
        let _ = writeln!(plan, "**Day {}**", day.day);
        if day.items.is_empty() {
            let _ = writeln!(plan, "- {}", FREE_DAY_MARKER);
        } else {
            for item in &day.items {
                let _ = writeln!(
                    plan,
                    "- {} ({}, ~{}h, est ${})",
                    item.name, item.tag, item.typical_hours, item.cost_est
                );
            }
        }
        plan.push('\n');
    }

    let _ = writeln!(plan, "### Booking & prep checklist");
    for entry in checklist {
        let _ = writeln!(plan, "- {}", entry);
    }

    plan
}
