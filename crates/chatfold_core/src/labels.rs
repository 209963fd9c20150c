//! Human-readable labels for tool-call chips.
//!
//! Metadata keeps the front-end shape `{ toolName: { i18n: { pending, done } } }`
//! and can be loaded from TOML or JSON.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatfoldError, Result};
use crate::tool_call::ToolStatus;

/// The pair of strings a tool chip shows while pending and once done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolLabels {
    pub pending: String,
    pub done: String,
}

impl ToolLabels {
    pub fn new(pending: impl Into<String>, done: impl Into<String>) -> Self {
        Self {
            pending: pending.into(),
            done: done.into(),
        }
    }

    /// Labels used for tools without metadata.
    pub fn fallback(name: &str) -> Self {
        Self {
            pending: format!("Running {name}"),
            done: format!("Ran {name}"),
        }
    }

    pub fn for_status(&self, status: ToolStatus) -> &str {
        match status {
            ToolStatus::Pending => &self.pending,
            ToolStatus::Done => &self.done,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMetadataEntry {
    pub i18n: ToolLabels,
}

/// Per-tool display metadata, keyed by tool name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolMetadata {
    entries: HashMap<String, ToolMetadataEntry>,
}

impl ToolMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(mut self, name: impl Into<String>, labels: ToolLabels) -> Self {
        self.insert(name, labels);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, labels: ToolLabels) {
        self.entries.insert(name.into(), ToolMetadataEntry { i18n: labels });
    }

    pub fn get(&self, name: &str) -> Option<&ToolLabels> {
        self.entries.get(name).map(|e| &e.i18n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ChatfoldError::Config(format!("invalid tool metadata: {e}")))
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| ChatfoldError::Config(format!("invalid tool metadata: {e}")))
    }

    /// Load from a `.json` file, or TOML for any other extension.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let metadata = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&raw)?,
            _ => Self::from_toml_str(&raw)?,
        };
        tracing::debug!(path = %path.display(), tools = metadata.len(), "loaded tool metadata");
        Ok(metadata)
    }
}

/// Resolve the labels for `name`, falling back to "Running …" / "Ran …".
pub fn resolve_labels(metadata: &ToolMetadata, name: &str) -> ToolLabels {
    metadata
        .get(name)
        .cloned()
        .unwrap_or_else(|| ToolLabels::fallback(name))
}
