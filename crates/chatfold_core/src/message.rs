use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::{ChatfoldError, Result};
use crate::tool_call::ToolCall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    Error,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Error => "error",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            "error" => Some(Role::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the conversation as delivered by the message source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ChatMessage {
    User(UserMessage),
    Assistant(AssistantMessage),
    Error(ErrorMessage),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMessage {
    pub content: String,
}

/// An assistant update. While a turn streams, the source emits one of these
/// per tool-call step; the last one of the turn has no tool calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
    /// Orchestrator-defined scalar fields, merged last-wins when collapsing.
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub content: String,
}

impl AssistantMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_calls: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_tool_call(mut self, tool_call: ToolCall) -> Self {
        self.tool_calls.push(tool_call);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage::User(UserMessage {
            content: content.into(),
        })
    }

    pub fn assistant(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        ChatMessage::Assistant(AssistantMessage {
            content: content.into(),
            tool_calls,
            extra: Map::new(),
        })
    }

    pub fn error(content: impl Into<String>) -> Self {
        ChatMessage::Error(ErrorMessage {
            content: content.into(),
        })
    }

    pub fn role(&self) -> Role {
        match self {
            ChatMessage::User(_) => Role::User,
            ChatMessage::Assistant(_) => Role::Assistant,
            ChatMessage::Error(_) => Role::Error,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            ChatMessage::User(m) => &m.content,
            ChatMessage::Assistant(m) => &m.content,
            ChatMessage::Error(m) => &m.content,
        }
    }

    /// Tool calls of an assistant message; empty for other roles.
    pub fn tool_calls(&self) -> &[ToolCall] {
        match self {
            ChatMessage::Assistant(m) => &m.tool_calls,
            ChatMessage::User(_) | ChatMessage::Error(_) => &[],
        }
    }

    pub fn as_assistant(&self) -> Option<&AssistantMessage> {
        match self {
            ChatMessage::Assistant(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ChatMessage::Error(_))
    }
}

impl From<AssistantMessage> for ChatMessage {
    fn from(msg: AssistantMessage) -> Self {
        ChatMessage::Assistant(msg)
    }
}

/// Decode a JSON array of messages from the message source.
///
/// Unknown roles are rejected rather than coerced; an assistant message
/// without `toolCalls` decodes with an empty list.
pub fn decode_messages(json: &str) -> Result<Vec<ChatMessage>> {
    let raw: Vec<JsonValue> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| decode_message(index, value))
        .collect()
}

fn decode_message(index: usize, value: JsonValue) -> Result<ChatMessage> {
    if let Some(role) = value.get("role").and_then(JsonValue::as_str) {
        if Role::parse(role).is_none() {
            tracing::warn!(index, role, "rejecting message with unknown role");
            return Err(ChatfoldError::UnknownRole {
                index,
                role: role.to_string(),
            });
        }
    }
    Ok(serde_json::from_value(value)?)
}
