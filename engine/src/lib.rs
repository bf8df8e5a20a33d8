//! Wayfarer Engine Library
//!
//! This library provides the core functionality of the Wayfarer trip-planning
//! engine. It is used by both the main binary and integration tests.

/// Configuration management module
pub mod config;

/// Travel catalog store module
pub mod catalog;

/// Free-text constraint extraction module
pub mod extractor;

/// Destination selection module
pub mod selector;

/// Itinerary construction module
pub mod itinerary;

/// Budget estimation module
pub mod budget;

/// Over-budget adjustment module
pub mod adjuster;

/// Final plan assembly module
pub mod assembler;

/// Workflow orchestration module
pub mod pipeline;

/// Telemetry and Observability
pub mod telemetry;

/// CLI interface module
pub mod cli;

/// Command handlers module
pub mod handlers;
