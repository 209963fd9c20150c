//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Collapse and render chat transcripts with tool-call chips
#[derive(Parser)]
#[command(name = "chatfold", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for AI and machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the collapsed form of a transcript as JSON
    Collapse {
        /// Transcript file: JSON array of role-tagged messages
        transcript: PathBuf,
    },

    /// Render a transcript as plain text lines
    Render {
        transcript: PathBuf,
        /// Tool label metadata (TOML or JSON). Uses CHATFOLD_TOOL_METADATA if not set.
        #[arg(long)]
        metadata: Option<PathBuf>,
        /// Render width in columns
        #[arg(long, default_value_t = 80)]
        width: usize,
    },

    /// Open the interactive chat viewer (requires a TTY)
    View {
        transcript: PathBuf,
        /// Tool label metadata (TOML or JSON). Uses CHATFOLD_TOOL_METADATA if not set.
        #[arg(long)]
        metadata: Option<PathBuf>,
        /// Color theme: dark or light. Uses CHATFOLD_THEME if not set.
        #[arg(long, env = "CHATFOLD_THEME", default_value = "dark")]
        theme: String,
    },

    /// Show the pending and done labels for a tool
    Labels {
        /// Tool name as it appears in tool calls
        tool: String,
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Inspect and call the demo capability catalog
    Capabilities {
        #[command(subcommand)]
        action: CapabilitiesAction,
    },
}

#[derive(Subcommand)]
pub enum CapabilitiesAction {
    /// List registered components and tools
    List,

    /// Show a capability's description and schema
    Info {
        /// Capability name
        name: String,
    },

    /// Call a tool with JSON arguments
    Call {
        /// Tool name
        name: String,

        /// JSON arguments (e.g. '{"term": "red mug"}')
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}
