//! Tool chip: one line per tool call showing its pending or done label.
//!
//! Labels come from [chatfold_core::resolve_labels]; tools without metadata
//! show "Running <name>" / "Ran <name>".

use chatfold_core::{resolve_labels, ToolCall, ToolMetadata, ToolStatus};
use ratatui::text::{Line, Span};

use crate::style::{chip_style, rgb_to_color, success_style, text_style};
use crate::theme::ChatPalette;
use crate::utils::LEFT_PADDING;

/// Braille spinner frames for pending chips, advanced by the view's frame counter.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const DONE_ICON: &str = "✓";

pub fn spinner_frame(frame: u64) -> &'static str {
    SPINNER_FRAMES[(frame as usize) % SPINNER_FRAMES.len()]
}

/// Build the chip line for `tool`: icon (spinner or ✓) followed by the label.
pub fn tool_chip_line(
    tool: &ToolCall,
    metadata: &ToolMetadata,
    palette: &ChatPalette,
    frame: u64,
) -> Line<'static> {
    let labels = resolve_labels(metadata, &tool.name);
    let label = labels.for_status(tool.status).to_string();
    let (icon, icon_style) = match tool.status {
        ToolStatus::Pending => (spinner_frame(frame), text_style(palette.accent)),
        ToolStatus::Done => (DONE_ICON, success_style(palette.success)),
    };
    let body = chip_style(palette.text, palette.chip_background);
    Line::from(vec![
        Span::raw(LEFT_PADDING),
        Span::styled(" ", body),
        Span::styled(icon.to_string(), icon_style.bg(rgb_to_color(palette.chip_background))),
        Span::styled(" ", body),
        Span::styled(label, body),
        Span::styled(" ", body),
    ])
}
