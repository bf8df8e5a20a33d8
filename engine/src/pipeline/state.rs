//! Workflow state and trace types
//!
//! One [`WorkflowState`] is created per run, threaded by value through the
//! stage sequence, and discarded once the final plan is rendered. Nothing in
//! it is shared across runs.

use chrono::{DateTime, Utc};
use sdk::errors::PlannerError;
use sdk::types::{BudgetBreakdown, Constraints, Destination, Itinerary, TripConcept};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// The fixed pipeline stage sequence
///
/// Strictly linear with no cycles or backward edges; `ValidateAdjust` is the
/// only stage with an internal conditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ParseConstraints,
    ProposeOptions,
    ChooseDestination,
    BuildItinerary,
    EstimateBudget,
    ValidateAdjust,
    Finalize,
}

impl Stage {
    /// All stages in execution order
    pub const SEQUENCE: [Stage; 7] = [
        Stage::ParseConstraints,
        Stage::ProposeOptions,
        Stage::ChooseDestination,
        Stage::BuildItinerary,
        Stage::EstimateBudget,
        Stage::ValidateAdjust,
        Stage::Finalize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ParseConstraints => "parse_constraints",
            Stage::ProposeOptions => "propose_options",
            Stage::ChooseDestination => "choose_destination",
            Stage::BuildItinerary => "build_itinerary",
            Stage::EstimateBudget => "estimate_budget",
            Stage::ValidateAdjust => "validate_adjust",
            Stage::Finalize => "finalize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordered trace record, appended by exactly one stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEntry {
    pub stage: Stage,
    pub payload: Value,
    pub recorded_at: DateTime<Utc>,
}

/// Per-run pipeline state
///
/// Owned exclusively by one run; each stage consumes the previous state and
/// returns the next one, appending exactly one trace entry.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowState {
    pub run_id: Uuid,
    pub user_request: String,
    pub constraints: Constraints,
    pub trip_options: Vec<TripConcept>,
    pub selected_destination: Option<Destination>,
    pub itinerary: Option<Itinerary>,
    pub budget: Option<BudgetBreakdown>,
    pub checklist: Vec<String>,
    pub final_plan: String,
    pub trace: Vec<TraceEntry>,
}

impl WorkflowState {
    /// Fresh state for a new run
    pub fn new(user_request: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            user_request: user_request.into(),
            constraints: Constraints::default(),
            trip_options: Vec::new(),
            selected_destination: None,
            itinerary: None,
            budget: None,
            checklist: Vec::new(),
            final_plan: String::new(),
            trace: Vec::new(),
        }
    }

    /// Append a trace record for the given stage
    pub fn record(&mut self, stage: Stage, payload: Value) {
        self.trace.push(TraceEntry {
            stage,
            payload,
            recorded_at: Utc::now(),
        });
    }

    /// Selected destination, or a sequencing error if ChooseDestination has
    /// not run yet
    pub fn destination(&self) -> Result<&Destination, PlannerError> {
        self.selected_destination
            .as_ref()
            .ok_or_else(|| PlannerError::State("no destination selected yet".to_string()))
    }

    /// Current itinerary, or a sequencing error if BuildItinerary has not
    /// run yet
    pub fn current_itinerary(&self) -> Result<&Itinerary, PlannerError> {
        self.itinerary
            .as_ref()
            .ok_or_else(|| PlannerError::State("no itinerary built yet".to_string()))
    }

    /// Current budget, or a sequencing error if EstimateBudget has not run
    /// yet
    pub fn current_budget(&self) -> Result<&BudgetBreakdown, PlannerError> {
        self.budget
            .as_ref()
            .ok_or_else(|| PlannerError::State("no budget estimated yet".to_string()))
    }
}

/// Structured result of a completed run: the boundary the CLI consumes
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutcome {
    pub final_plan: String,
    pub trace: Vec<TraceEntry>,
    pub constraints: Constraints,
    pub selected_destination: Destination,
    pub budget: BudgetBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stage_sequence_is_seven_linear_stages() {
        assert_eq!(Stage::SEQUENCE.len(), 7);
        assert_eq!(Stage::SEQUENCE[0], Stage::ParseConstraints);
        assert_eq!(Stage::SEQUENCE[6], Stage::Finalize);
    }

    #[test]
    fn test_stage_serializes_snake_case() {
        let json = serde_json::to_string(&Stage::ValidateAdjust).unwrap();
        assert_eq!(json, "\"validate_adjust\"");
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut state = WorkflowState::new("trip");
        state.record(Stage::ParseConstraints, json!({"a": 1}));
        state.record(Stage::ProposeOptions, json!({"b": 2}));

        assert_eq!(state.trace.len(), 2);
        assert_eq!(state.trace[0].stage, Stage::ParseConstraints);
        assert_eq!(state.trace[1].stage, Stage::ProposeOptions);
    }

    #[test]
    fn test_accessors_report_sequencing_errors() {
        let state = WorkflowState::new("trip");
        assert!(state.destination().is_err());
        assert!(state.current_itinerary().is_err());
        assert!(state.current_budget().is_err());
    }
}
