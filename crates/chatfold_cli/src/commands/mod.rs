//! Command dispatch.

pub mod capabilities;
pub mod collapse;
pub mod labels;
pub mod render;
pub mod view;

use anyhow::Result;
use chatfold_observability::{init, ObservabilityConfig};

use crate::cli::{Cli, Command};
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    // The viewer owns the terminal and routes logs into its status bar.
    if !matches!(cli.command, Command::View { .. }) {
        init_console_logging(cli.verbose);
    }

    match cli.command {
        Command::Collapse { transcript } => collapse::handle(&transcript),
        Command::Render { transcript, metadata, width } => render::handle(&transcript, metadata, width),
        Command::View { transcript, metadata, theme } => view::handle(&transcript, metadata, &theme).await,
        Command::Labels { tool, metadata } => labels::handle(&tool, metadata),
        Command::Capabilities { action } => capabilities::handle(action).await,
    }
}

/// Logs go to stderr so stdout stays clean for data.
fn init_console_logging(verbose: bool) {
    let mut config = ObservabilityConfig::from_env();
    if verbose {
        config = config.with_log_level("debug");
    } else if config.log_level.is_none() {
        config = config.with_log_level("warn");
    }
    if let Err(e) = init(config) {
        output::warning(&format!("Observability init failed (continuing): {e}"));
    }
}
