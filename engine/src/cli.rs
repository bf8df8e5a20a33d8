//! CLI interface for Wayfarer
//!
//! This module provides the command-line interface using clap's derive API.
//! It defines all commands and global flags for the trip-planning pipeline.

use clap::{Parser, Subcommand};
use sdk::types::Region;
use std::path::PathBuf;

/// Wayfarer Trip Planner
///
/// A deterministic trip-planning pipeline: describe a trip in plain text and
/// get a day-by-day itinerary, a cost breakdown, and a preparation checklist.
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log: Option<String>,

    /// Specify alternate configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan a trip from a free-text request
    Plan {
        /// The trip request, e.g. "a 5-day trip in Europe, budget $1800"
        request: Vec<String>,

        /// Also print the stage-by-stage execution trace
        #[arg(long)]
        trace: bool,
    },

    /// List catalog destinations
    Destinations {
        /// Filter by region (europe, asia, americas)
        #[arg(long, value_name = "REGION")]
        region: Option<Region>,
    },

    /// Validate configuration and catalog datasets
    Doctor,
}
