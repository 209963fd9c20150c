//! chatfold observability: tracing subscriber setup shared by the CLI and TUI.
//!
//! ```no_run
//! use chatfold_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("chatfold").with_log_level("debug");
//! init(config)?;
//! tracing::info!("started");
//! # Ok::<(), chatfold_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `CHATFOLD_LOG` or `RUST_LOG` - log level filter (default `info`)
//! - `CHATFOLD_LOG_CONSOLE` - set to `0` to silence console output

pub mod config;
pub mod error;
pub mod sink_layer;
pub mod telemetry;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::init;
