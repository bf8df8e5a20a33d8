// Wayfarer Trip Planner
// Main entry point for the wayfarer binary

use clap::Parser;
use wayfarer_engine::cli::{Cli, Command};
use wayfarer_engine::config::Config;
use wayfarer_engine::handlers::{
    handle_destinations, handle_doctor, handle_plan, OutputFormat,
};
use wayfarer_engine::telemetry::{init_telemetry, resolve_log_level};

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration (or use custom path if provided). Config-load
    // failures surface through the returned error, not through logging.
    let config = if let Some(config_path) = &cli.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load_or_create()?
    };

    // Install telemetry once, at the resolved level. The first subscriber
    // installed wins for the rest of the process, so this must happen after
    // the level is known for --log and core.log_level to take effect.
    let log_level = resolve_log_level(cli.log.as_deref(), &config.core.log_level);
    init_telemetry(log_level);

    tracing::debug!("Wayfarer v{}", env!("CARGO_PKG_VERSION"));

    // Determine output format
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    // Handle commands
    match cli.command {
        Command::Plan { request, trace } => {
            let request = request.join(" ");
            if request.trim().is_empty() {
                anyhow::bail!("Empty trip request. Describe the trip you want to plan");
            }
            handle_plan(&request, &config, format, trace)
        }

        Command::Destinations { region } => handle_destinations(region, &config, format),

        Command::Doctor => handle_doctor(&config, format),
    }
}
