//! chatfold-core: chat message model and the presentation logic behind the
//! chat view.
//!
//! - [collapse] folds streamed assistant updates into one message per turn.
//! - [labels] resolves tool-chip labels.
//! - [capability] holds the components and tools exposed to the orchestrator.

pub mod capability;
pub mod collapse;
pub mod error;
pub mod labels;
pub mod message;
pub mod schema;
pub mod tool_call;

pub use capability::{
    CapabilityInfo, CapabilityKind, CapabilityRegistry, ChildrenPolicy, ComponentCapability,
    ToolHandler, ToolResult,
};
pub use collapse::{collapse, merge_run, tool_call_count};
pub use error::{ChatfoldError, Result};
pub use labels::{resolve_labels, ToolLabels, ToolMetadata};
pub use message::{decode_messages, AssistantMessage, ChatMessage, ErrorMessage, Role, UserMessage};
pub use tool_call::{ToolCall, ToolStatus};
