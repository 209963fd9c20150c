//! Configuration for logging

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Sink for formatted log lines (e.g. the TUI trace buffer). Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Logging configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name, attached to the startup event
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Log level filter (e.g., "info", "chatfold_core=debug")
    /// Defaults to "info" if not set
    pub log_level: Option<String>,

    /// Write formatted events to stderr
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Optional sink for each formatted log line. Not serialized.
    #[serde(skip)]
    pub log_sink: Option<LogSink>,
}

fn default_service_name() -> String {
    "chatfold".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: None,
            enable_console: true,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("log_level", &self.log_level)
            .field("enable_console", &self.enable_console)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `CHATFOLD_LOG` or `RUST_LOG` → log_level
    /// - `CHATFOLD_LOG_CONSOLE` (`0`/`false` disables) → enable_console
    pub fn from_env() -> Self {
        let log_level = std::env::var("CHATFOLD_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        let enable_console = std::env::var("CHATFOLD_LOG_CONSOLE")
            .map(|v| !matches!(v.trim(), "0" | "false" | "off"))
            .unwrap_or(true);

        Self {
            log_level,
            enable_console,
            ..Default::default()
        }
    }
}
