//! Wayfarer SDK
//!
//! Shared library providing the trip-planning data model and error types.
//! This crate is used by the engine and by integration tests.

/// Error types and handling
pub mod errors;

/// Trip-planning data model
pub mod types;

// Re-export commonly used types
pub use errors::{PlannerError, PlannerErrorExt};
pub use types::{
    Attraction, BudgetBreakdown, Constraints, Destination, Itinerary, ItineraryDay, Pace, Region,
    TripConcept,
};
