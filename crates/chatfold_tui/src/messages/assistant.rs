//! Assistant message rendering.
//!
//! A collapsed assistant turn renders as an avatar line, one chip per tool
//! call, then the wrapped content. Content is omitted while it is empty, so a
//! turn that is still calling tools shows only its chips.

use chatfold_core::{AssistantMessage, ToolMetadata};
use ratatui::text::{Line, Span};

use super::tool_chip::tool_chip_line;
use crate::style::{text_muted_style, text_style};
use crate::theme::ChatPalette;
use crate::utils::{wrap_lines, LEFT_PADDING};

/// Avatar shown at the start of each assistant turn (accent color).
pub const ASSISTANT_INDICATOR: &str = "▸";

const ASSISTANT_LEFT_BORDER: &str = "│ ";

pub fn assistant_message_lines(
    msg: &AssistantMessage,
    metadata: &ToolMetadata,
    palette: &ChatPalette,
    width: usize,
    frame: u64,
) -> Vec<Line<'static>> {
    let border_span = Span::styled(ASSISTANT_LEFT_BORDER.to_string(), text_muted_style(palette.text_muted));
    let indicator = Span::styled(ASSISTANT_INDICATOR.to_string(), text_style(palette.accent));
    let indent_len = LEFT_PADDING.len() + ASSISTANT_LEFT_BORDER.len();
    let wrapped = wrap_lines(&msg.content, width.saturating_sub(indent_len).max(1));

    let mut lines = Vec::with_capacity(msg.tool_calls.len() + wrapped.len() + 1);

    if msg.has_tool_calls() {
        lines.push(Line::from(vec![border_span.clone(), indicator.clone()]));
        for tool in &msg.tool_calls {
            let mut chip = tool_chip_line(tool, metadata, palette, frame);
            chip.spans.insert(0, border_span.clone());
            lines.push(chip);
        }
    }

    for (i, seg) in wrapped.iter().enumerate() {
        let lead = if i == 0 && !msg.has_tool_calls() {
            vec![border_span.clone(), indicator.clone(), Span::raw(" ")]
        } else {
            vec![border_span.clone(), Span::raw(LEFT_PADDING)]
        };
        let mut spans = lead;
        spans.push(Span::styled(seg.clone(), text_style(palette.text)));
        lines.push(Line::from(spans));
    }

    if lines.is_empty() {
        lines.push(Line::from(vec![border_span, indicator]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatfold_core::ToolCall;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn content_only_turn() {
        let msg = AssistantMessage::new("Here is the answer.");
        let lines = assistant_message_lines(&msg, &ToolMetadata::new(), &ChatPalette::dark(), 40, 0);
        assert_eq!(lines.len(), 1);
        assert!(text_of(&lines[0]).contains(ASSISTANT_INDICATOR));
        assert!(text_of(&lines[0]).contains("Here is the answer."));
    }

    #[test]
    fn tool_calls_render_as_chips_before_content() {
        let msg = AssistantMessage::new("Done.")
            .with_tool_call(ToolCall::done("searchProducts"))
            .with_tool_call(ToolCall::pending("getPresentationList"));
        let lines = assistant_message_lines(&msg, &ToolMetadata::new(), &ChatPalette::dark(), 60, 0);
        assert_eq!(lines.len(), 4);
        assert!(text_of(&lines[1]).contains("Ran searchProducts"));
        assert!(text_of(&lines[2]).contains("Running getPresentationList"));
        assert!(text_of(&lines[3]).contains("Done."));
    }

    #[test]
    fn empty_content_is_omitted() {
        let msg = AssistantMessage::new("").with_tool_call(ToolCall::pending("search"));
        let lines = assistant_message_lines(&msg, &ToolMetadata::new(), &ChatPalette::dark(), 40, 0);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn empty_turn_still_shows_avatar() {
        let msg = AssistantMessage::new("");
        let lines = assistant_message_lines(&msg, &ToolMetadata::new(), &ChatPalette::dark(), 40, 0);
        assert_eq!(lines.len(), 1);
        assert!(text_of(&lines[0]).contains(ASSISTANT_INDICATOR));
    }

    #[test]
    fn long_content_wraps() {
        let msg = AssistantMessage::new("First line. Second line with more words.");
        let lines = assistant_message_lines(&msg, &ToolMetadata::new(), &ChatPalette::dark(), 15, 0);
        assert!(lines.len() > 1);
    }
}
