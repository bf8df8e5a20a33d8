//! Workflow orchestration
//!
//! Threads an owned [`WorkflowState`] through the fixed stage sequence:
//! parse → propose → choose → build → estimate → validate/adjust → finalize.
//! Each stage consumes the previous state, appends exactly one trace entry,
//! and returns the next state. No stage is retried and no stage is revisited;
//! a stage failure aborts the run with the stage name attached to the error.

pub mod state;

pub use state::{PlanOutcome, Stage, TraceEntry, WorkflowState};

use crate::catalog::CatalogStore;
use crate::extractor::ConstraintExtractor;
use crate::{adjuster, assembler, budget, itinerary, selector};
use sdk::errors::PlannerError;
use serde_json::json;
use tracing::{debug, info};

/// Number of characters kept in the final-plan trace preview
const PLAN_PREVIEW_CHARS: usize = 300;

/// The trip-planning pipeline
///
/// Owns its collaborators behind traits: the catalog store and the
/// constraint extractor are pluggable, the decision logic is not.
pub struct Planner {
    catalog: Box<dyn CatalogStore>,
    extractor: Box<dyn ConstraintExtractor>,
}

impl Planner {
    pub fn new(catalog: Box<dyn CatalogStore>, extractor: Box<dyn ConstraintExtractor>) -> Self {
        Self { catalog, extractor }
    }

    /// Run the full pipeline on a free-text trip request
    ///
    /// A successful run yields a rendered plan plus a complete trace of all
    /// 7 stages. A fatal stage error aborts immediately; the error names the
    /// failing stage.
    pub fn run(&self, user_request: &str) -> Result<PlanOutcome, PlannerError> {
        let state = WorkflowState::new(user_request);
        info!(run_id = %state.run_id, "Starting planning run");

        let state = self.parse_constraints(state);
        let state = self
            .propose_options(state)
            .map_err(|e| e.at_stage(Stage::ProposeOptions.as_str()))?;
        let state = self
            .choose_destination(state)
            .map_err(|e| e.at_stage(Stage::ChooseDestination.as_str()))?;
        let state = self
            .build_itinerary(state)
            .map_err(|e| e.at_stage(Stage::BuildItinerary.as_str()))?;
        let state = self
            .estimate_budget(state)
            .map_err(|e| e.at_stage(Stage::EstimateBudget.as_str()))?;
        let state = self
            .validate_adjust(state)
            .map_err(|e| e.at_stage(Stage::ValidateAdjust.as_str()))?;
        let state = self
            .finalize(state)
            .map_err(|e| e.at_stage(Stage::Finalize.as_str()))?;

        info!(run_id = %state.run_id, stages = state.trace.len(), "Planning run complete");

        let WorkflowState {
            final_plan,
            trace,
            constraints,
            selected_destination,
            budget,
            ..
        } = state;

        Ok(PlanOutcome {
            final_plan,
            trace,
            constraints,
            selected_destination: selected_destination
                .ok_or_else(|| PlannerError::State("run finished without a destination".into()))?,
            budget: budget
                .ok_or_else(|| PlannerError::State("run finished without a budget".into()))?,
        })
    }

    /// Stage 1: extract structured constraints from the request text
    ///
    /// Infallible: undetected fields take their documented defaults.
    fn parse_constraints(&self, mut state: WorkflowState) -> WorkflowState {
        state.constraints = self.extractor.extract(&state.user_request);
        debug!(?state.constraints, "Parsed constraints");

        state.record(
            Stage::ParseConstraints,
            json!({ "constraints": state.constraints }),
        );
        state
    }

    /// Stage 2: rank catalog destinations and wrap them into trip concepts
    ///
    /// Zero matches is fatal: no destination can ever be selected, so the
    /// run aborts here, before ChooseDestination.
    fn propose_options(&self, mut state: WorkflowState) -> Result<WorkflowState, PlannerError> {
        let candidates = selector::search(self.catalog.as_ref(), &state.constraints)?;
        let concepts = selector::propose(&state.constraints, candidates);

        if concepts.is_empty() {
            return Err(PlannerError::NoMatchingDestination {
                region: state
                    .constraints
                    .region
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "any".to_string()),
            });
        }

        state.trip_options = concepts;
        state.record(
            Stage::ProposeOptions,
            json!({ "options": state.trip_options }),
        );
        Ok(state)
    }

    /// Stage 3: pick the concept with the lowest rough total
    fn choose_destination(&self, mut state: WorkflowState) -> Result<WorkflowState, PlannerError> {
        let (destination, rough_total) = selector::choose(&state.constraints, &state.trip_options)?;
        info!(city = %destination.city, rough_total, "Chose destination");

        state.record(
            Stage::ChooseDestination,
            json!({
                "selected_destination": destination,
                "rough_total": rough_total,
            }),
        );
        state.selected_destination = Some(destination);
        Ok(state)
    }

    /// Stage 4: allocate attractions into days
    fn build_itinerary(&self, mut state: WorkflowState) -> Result<WorkflowState, PlannerError> {
        let city = state.destination()?.city.clone();
        let itin = itinerary::build(self.catalog.as_ref(), &city, &state.constraints)?;

        state.record(
            Stage::BuildItinerary,
            json!({ "itinerary_preview": itin.plan.first() }),
        );
        state.itinerary = Some(itin);
        Ok(state)
    }

    /// Stage 5: compute the full cost breakdown
    fn estimate_budget(&self, mut state: WorkflowState) -> Result<WorkflowState, PlannerError> {
        let constraints = &state.constraints;
        let base = budget::estimate_base(
            state.destination()?,
            constraints.days,
            constraints.travelers,
            constraints.flight_est_per_person,
        );
        let activities = budget::activity_cost(state.current_itinerary()?);
        let breakdown = budget::breakdown(&base, activities, constraints.budget);

        state.record(Stage::EstimateBudget, json!({ "budget": breakdown }));
        state.budget = Some(breakdown);
        Ok(state)
    }

    /// Stage 6: the only branch point in the pipeline
    ///
    /// Within budget: records a no-op trace entry and changes nothing.
    /// Over budget: trims paid activities once and replaces the itinerary
    /// and budget in the state. Never loops.
    fn validate_adjust(&self, mut state: WorkflowState) -> Result<WorkflowState, PlannerError> {
        let prior = state.current_budget()?.clone();

        if prior.within_budget {
            state.record(Stage::ValidateAdjust, json!({ "action": "no_change" }));
            return Ok(state);
        }

        let itin = state.current_itinerary()?.clone();
        let (trimmed, recomputed, cap) =
            adjuster::adjust(itin, &prior, state.constraints.budget);

        state.record(
            Stage::ValidateAdjust,
            json!({
                "action": "reduced_paid_activities",
                "max_paid": cap,
                "new_budget": recomputed,
            }),
        );
        state.itinerary = Some(trimmed);
        state.budget = Some(recomputed);
        Ok(state)
    }

    /// Stage 7: render the final plan and checklist
    fn finalize(&self, mut state: WorkflowState) -> Result<WorkflowState, PlannerError> {
        let checklist = assembler::checklist(&state.constraints, state.destination()?);
        let plan = assembler::render(
            &state.constraints,
            state.destination()?,
            state.current_itinerary()?,
            state.current_budget()?,
            &checklist,
        );

        let preview: String = plan.chars().take(PLAN_PREVIEW_CHARS).collect();
        state.record(
            Stage::Finalize,
            json!({ "final_plan_preview": format!("{}...", preview) }),
        );
        state.checklist = checklist;
        state.final_plan = plan;
        Ok(state)
    }
}
