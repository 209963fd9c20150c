//! Message rendering. Uses crate::theme for colors.
//!
//! - **user**: User message lines.
//! - **assistant**: Collapsed assistant turn: avatar, tool chips, content.
//! - **tool_chip**: One tool call with its pending/done label.
//! - **error**: Error message with optional retry hint.

pub mod assistant;
pub mod error;
pub mod tool_chip;
pub mod user;

use chatfold_core::{ChatMessage, ToolMetadata};
use ratatui::text::Line;

use crate::theme::ChatPalette;

/// Render one collapsed message. `is_last` enables the retry hint on errors.
pub fn message_lines(
    msg: &ChatMessage,
    metadata: &ToolMetadata,
    palette: &ChatPalette,
    width: usize,
    frame: u64,
    is_last: bool,
) -> Vec<Line<'static>> {
    match msg {
        ChatMessage::User(m) => user::user_message_lines(m, palette, width),
        ChatMessage::Assistant(m) => assistant::assistant_message_lines(m, metadata, palette, width, frame),
        ChatMessage::Error(m) => error::error_message_lines(m, palette, width, is_last),
    }
}
