//! Registry of the UI components and tools exposed to the model orchestrator.
//!
//! Components are declarative: the orchestrator may ask the front-end to
//! render them with inputs matching their schema. Tools are executed here
//! and their JSON result is handed back to the orchestrator.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{ChatfoldError, Result};

pub type ToolResult = anyhow::Result<JsonValue>;

#[async_trait]
pub trait ToolHandler: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters_schema(&self) -> JsonValue;
    async fn execute(&self, args: JsonValue) -> ToolResult;
}

/// Whether a component accepts nested components as children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildrenPolicy {
    #[default]
    None,
    Any,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentCapability {
    pub name: String,
    pub description: String,
    pub input: JsonValue,
    pub children: ChildrenPolicy,
}

impl ComponentCapability {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input: crate::schema::empty(),
            children: ChildrenPolicy::None,
        }
    }

    pub fn with_input(mut self, input: JsonValue) -> Self {
        self.input = input;
        self
    }

    pub fn with_children(mut self, children: ChildrenPolicy) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    Component,
    Tool,
}

/// What the orchestrator sees for one registered capability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityInfo {
    pub name: String,
    pub kind: CapabilityKind,
    pub description: String,
    pub schema: JsonValue,
}

enum Capability {
    Component(ComponentCapability),
    Tool(Arc<dyn ToolHandler>),
}

impl Capability {
    fn info(&self) -> CapabilityInfo {
        match self {
            Capability::Component(c) => CapabilityInfo {
                name: c.name.clone(),
                kind: CapabilityKind::Component,
                description: c.description.clone(),
                schema: c.input.clone(),
            },
            Capability::Tool(t) => CapabilityInfo {
                name: t.name().to_string(),
                kind: CapabilityKind::Tool,
                description: t.description().to_string(),
                schema: t.parameters_schema(),
            },
        }
    }
}

#[derive(Default)]
pub struct CapabilityRegistry {
    entries: BTreeMap<String, Capability>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_component(&mut self, component: ComponentCapability) -> Result<()> {
        let name = component.name.clone();
        self.insert(name, Capability::Component(component))
    }

    pub fn register_tool<T: ToolHandler + 'static>(&mut self, tool: T) -> Result<()> {
        let name = tool.name().to_string();
        self.insert(name, Capability::Tool(Arc::new(tool)))
    }

    fn insert(&mut self, name: String, capability: Capability) -> Result<()> {
        if self.entries.contains_key(&name) {
            return Err(ChatfoldError::DuplicateCapability(name));
        }
        tracing::debug!(capability = %name, "registered capability");
        self.entries.insert(name, capability);
        Ok(())
    }

    /// All capabilities, sorted by name.
    pub fn list(&self) -> Vec<CapabilityInfo> {
        self.entries.values().map(Capability::info).collect()
    }

    pub fn get(&self, name: &str) -> Option<CapabilityInfo> {
        self.entries.get(name).map(Capability::info)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run a tool; returns its output and duration in milliseconds.
    pub async fn call(&self, name: &str, args: JsonValue) -> Result<(JsonValue, u64)> {
        let tool = match self.entries.get(name) {
            Some(Capability::Tool(tool)) => Arc::clone(tool),
            Some(Capability::Component(_)) => {
                return Err(ChatfoldError::NotCallable(name.to_string()));
            }
            None => return Err(ChatfoldError::CapabilityNotFound(name.to_string())),
        };

        let start = Instant::now();
        let result = tool.execute(args).await?;
        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(tool = name, duration_ms, "tool call finished");

        Ok((result, duration_ms))
    }
}
