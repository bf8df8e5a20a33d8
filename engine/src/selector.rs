//! Destination selection
//!
//! Scores catalog destinations against the traveler's interests, ranks them,
//! wraps the best candidates into trip concepts, and picks the concept with
//! the lowest rough cost (base estimate excluding activities).

use crate::budget;
use crate::catalog::CatalogStore;
use sdk::errors::PlannerError;
use sdk::types::{Constraints, Destination, TripConcept};
use tracing::debug;

/// Maximum number of trip concepts proposed per run
const MAX_CONCEPTS: usize = 4;

/// Tag overlap score: how many requested interests appear in the
/// destination's style-tag set (lowercase exact membership).
fn interest_score(destination: &Destination, interests: &[String]) -> usize {
    interests
        .iter()
        .filter(|interest| {
            let interest = interest.to_lowercase();
            destination.style_tags.iter().any(|tag| *tag == interest)
        })
        .count()
}

/// Search the catalog and return the top candidates, best first
///
/// Ranking is (score descending, avg_lodging_per_night ascending): score is
/// the primary key, nightly cost breaks ties toward cheaper stays. The sort
/// is stable, so destinations equal on both keys keep catalog order.
/// Returns fewer than 4 candidates when the catalog has fewer matches, and
/// an empty list when nothing matches.
pub fn search(
    catalog: &dyn CatalogStore,
    constraints: &Constraints,
) -> Result<Vec<Destination>, PlannerError> {
    let mut candidates = catalog.destinations(constraints.region)?;

    let mut scored: Vec<(usize, Destination)> = candidates
        .drain(..)
        .map(|dest| (interest_score(&dest, &constraints.interests), dest))
        .collect();

    scored.sort_by(|(score_a, dest_a), (score_b, dest_b)| {
        score_b.cmp(score_a).then(
            dest_a
                .avg_lodging_per_night
                .total_cmp(&dest_b.avg_lodging_per_night),
        )
    });

    debug!(
        candidates = scored.len(),
        region = ?constraints.region,
        "Ranked destination candidates"
    );

    Ok(scored
        .into_iter()
        .take(MAX_CONCEPTS)
        .map(|(_, dest)| dest)
        .collect())
}

/// Wrap ranked destinations into human-readable trip concepts
pub fn propose(constraints: &Constraints, candidates: Vec<Destination>) -> Vec<TripConcept> {
    let interest_text = if constraints.interests.is_empty() {
        "general sightseeing".to_string()
    } else {
        constraints.interests.join(", ")
    };

    candidates
        .into_iter()
        .map(|destination| TripConcept {
            title: format!(
                "{} — {} pace, aligned with {}",
                destination.city, constraints.pace, interest_text
            ),
            city: destination.city.clone(),
            rationale: format!(
                "Tags: {}. Good fit for budget and interests based on the catalog.",
                destination.style_tags.join(", ")
            ),
            destination,
        })
        .collect()
}

/// Pick the concept whose destination minimizes the rough total
///
/// The rough total is the base estimate (lodging, food, local transport,
/// flights — no activities). A strict less-than comparison means earlier
/// concepts win ties, so the scan is deterministic in first-seen order.
pub fn choose(
    constraints: &Constraints,
    concepts: &[TripConcept],
) -> Result<(Destination, f64), PlannerError> {
    let mut best: Option<(&Destination, f64)> = None;

    for concept in concepts {
        let rough = budget::estimate_base(
            &concept.destination,
            constraints.days,
            constraints.travelers,
            constraints.flight_est_per_person,
        );

        let beats_current = match best {
            Some((_, best_total)) => rough.total_est < best_total,
            None => true,
        };
        if beats_current {
            best = Some((&concept.destination, rough.total_est));
        }
    }

    match best {
        Some((destination, rough_total)) => Ok((destination.clone(), rough_total)),
        None => Err(PlannerError::NoMatchingDestination {
            region: constraints
                .region
                .map(|r| r.to_string())
                .unwrap_or_else(|| "any".to_string()),
        }),
    }
}
