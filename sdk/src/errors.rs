//! Error types and handling
//!
//! This module provides the error types used throughout the Wayfarer engine.
//! All errors implement the `PlannerErrorExt` trait which provides
//! user-friendly hints and indicates whether errors are recoverable.

use thiserror::Error;

/// Trait for planner error extensions
///
/// This trait provides additional context for errors, including user-friendly
/// hints and recoverability information. All engine errors implement this trait.
pub trait PlannerErrorExt {
    /// Returns a user-friendly hint for the error
    ///
    /// The hint is safe to display to end users and does not contain
    /// internal implementation details.
    fn user_hint(&self) -> &str;

    /// Returns whether the error is recoverable
    ///
    /// Recoverable errors can be worked around by changing the request.
    /// Non-recoverable errors typically require fixing configuration or data.
    fn is_recoverable(&self) -> bool;
}

/// Main planner error type
///
/// This enum represents all possible errors that can occur in the Wayfarer
/// engine. Pipeline stage failures are fatal: the run aborts immediately and
/// no partial plan is produced.
///
/// # Error Categories
///
/// - **Configuration**: Invalid or missing configuration
/// - **Catalog**: Dataset read or parse failures
/// - **Selection**: No destination matches the requested filters
/// - **Stage**: A pipeline stage failed, wrapping the underlying cause
///
/// # Examples
///
/// ```
/// use sdk::errors::{PlannerError, PlannerErrorExt};
///
/// let error = PlannerError::NoMatchingDestination {
///     region: "europe".to_string(),
/// };
/// println!("Hint: {}", error.user_hint());
/// assert!(error.is_recoverable());
/// ```
#[derive(Debug, Error)]
pub enum PlannerError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Catalog errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    // Selection errors
    #[error("No destination matches region '{region}'")]
    NoMatchingDestination { region: String },

    // Pipeline sequencing errors: a stage ran before its inputs existed.
    // Unreachable through the public orchestrator entry point.
    #[error("Pipeline state error: {0}")]
    State(String),

    // Pipeline errors
    #[error("Stage '{stage}' failed: {source}")]
    Stage {
        stage: String,
        #[source]
        source: Box<PlannerError>,
    },

    // Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlannerError {
    /// Wrap this error with the name of the pipeline stage that raised it
    pub fn at_stage(self, stage: impl Into<String>) -> Self {
        Self::Stage {
            stage: stage.into(),
            source: Box::new(self),
        }
    }

    /// Name of the failing stage, if this error was raised inside the pipeline
    pub fn stage(&self) -> Option<&str> {
        match self {
            Self::Stage { stage, .. } => Some(stage),
            _ => None,
        }
    }
}

impl PlannerErrorExt for PlannerError {
    fn user_hint(&self) -> &str {
        match self {
            Self::Config(_) => "Check your config.toml file for errors",
            Self::Catalog(_) => "Catalog dataset is missing or malformed. Run 'wayfarer doctor'",
            Self::NoMatchingDestination { .. } => {
                "No destination matches your filters. Try a different region or fewer interests"
            }
            Self::State(_) => "Internal pipeline error. Please report this",
            Self::Stage { source, .. } => source.user_hint(),
            Self::Io(_) => "File system operation failed",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // Non-recoverable errors
            Self::Config(_) | Self::Catalog(_) | Self::State(_) | Self::Io(_) => false,

            // Widening the search can succeed
            Self::NoMatchingDestination { .. } => true,

            Self::Stage { source, .. } => source.is_recoverable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_wrapping_preserves_cause() {
        let error = PlannerError::NoMatchingDestination {
            region: "asia".to_string(),
        }
        .at_stage("propose_options");

        assert_eq!(error.stage(), Some("propose_options"));
        assert!(error.is_recoverable());
        assert!(error.to_string().contains("propose_options"));
        assert!(error.to_string().contains("asia"));
    }

    #[test]
    fn test_catalog_error_not_recoverable() {
        let error = PlannerError::Catalog("missing column 'city'".to_string());
        assert!(!error.is_recoverable());
        assert!(error.user_hint().contains("doctor"));
    }

    #[test]
    fn test_unwrapped_error_has_no_stage() {
        let error = PlannerError::Config("bad log level".to_string());
        assert_eq!(error.stage(), None);
    }
}
