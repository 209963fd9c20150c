use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// One tool invocation carried by an assistant message.
///
/// Fields other than `name` and `status` belong to the orchestrator
/// (arguments, results, call ids) and are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub status: ToolStatus,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, status: ToolStatus) -> Self {
        Self {
            name: name.into(),
            status,
            extra: Map::new(),
        }
    }

    pub fn pending(name: impl Into<String>) -> Self {
        Self::new(name, ToolStatus::Pending)
    }

    pub fn done(name: impl Into<String>) -> Self {
        Self::new(name, ToolStatus::Done)
    }

    pub fn with_field(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn with_status(mut self, status: ToolStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_pending(&self) -> bool {
        self.status == ToolStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    Pending,
    Done,
}
