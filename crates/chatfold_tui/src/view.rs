//! Chat view: scrollable collapsed conversation, status line, composer (fixed bottom).

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::messages::error::RETRY_HINT;
use crate::messages::message_lines;
use crate::state::ChatView;
use crate::style::{background_style, border_style, key_hint_style, text_muted_style, text_style};
use crate::utils::{truncate_ellipsis, COMPOSER_HEIGHT, LEFT_PADDING, MESSAGE_SPACING_LINES};

const COMPOSER_ICON: &str = "› ";
const COMPOSER_PLACEHOLDER: &str = "Type a message, Enter to send";
const STATUS_READY: &str = "q quit · ↑/↓ scroll";

/// All body lines for the collapsed messages, with blank spacing between
/// messages. Only the final message may carry the retry hint.
pub fn collapsed_lines(view: &ChatView, width: usize) -> Vec<Line<'static>> {
    let messages = view.messages();
    let mut lines = Vec::new();
    for (i, msg) in messages.iter().enumerate() {
        if i > 0 {
            lines.extend(std::iter::repeat_n(Line::from(""), MESSAGE_SPACING_LINES));
        }
        let is_last = i + 1 == messages.len();
        lines.extend(message_lines(
            msg,
            &view.metadata,
            &view.palette,
            width,
            view.frame_count,
            is_last,
        ));
    }
    lines
}

/// [collapsed_lines] without styling, trailing spaces trimmed.
pub fn plain_lines(view: &ChatView, width: usize) -> Vec<String> {
    collapsed_lines(view, width)
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            text.trim_end().to_string()
        })
        .collect()
}

/// Draw body, status and composer into `area`.
pub fn draw(frame: &mut Frame, view: &mut ChatView, area: Rect) {
    let [body, status, composer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(COMPOSER_HEIGHT),
        ])
        .areas(area);

    frame.render_widget(Block::default().style(background_style(view.palette.background)), area);
    draw_body(frame, view, body);
    draw_status(frame, view, status);
    draw_composer(frame, view, composer);
}

fn draw_body(frame: &mut Frame, view: &mut ChatView, area: Rect) {
    let width = area.width.saturating_sub(LEFT_PADDING.len() as u16) as usize;
    let lines = collapsed_lines(view, width);
    let max_scroll = lines.len().saturating_sub(area.height as usize);
    view.scroll = view.scroll.min(max_scroll);
    let top = top_offset(max_scroll, view.scroll);

    let inner = Rect {
        x: area.x + LEFT_PADDING.len() as u16,
        width: width as u16,
        ..area
    };
    let paragraph = Paragraph::new(lines).scroll((top, 0));
    frame.render_widget(paragraph, inner);
}

/// Convert a from-bottom scroll into Paragraph's from-top offset, saturating at u16::MAX.
fn top_offset(max_scroll: usize, scroll: usize) -> u16 {
    u16::try_from(max_scroll.saturating_sub(scroll)).unwrap_or(u16::MAX)
}

fn draw_status(frame: &mut Frame, view: &ChatView, area: Rect) {
    let palette = &view.palette;
    let width = area.width as usize;
    let mut spans = vec![Span::raw(LEFT_PADDING)];
    if view.can_retry() {
        spans.push(Span::styled(RETRY_HINT, key_hint_style(palette.accent)));
        spans.push(Span::raw("  "));
    }
    let text = if view.status.is_empty() { STATUS_READY } else { view.status.as_str() };
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    spans.push(Span::styled(
        truncate_ellipsis(text, width.saturating_sub(used)),
        text_muted_style(palette.text_muted),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_composer(frame: &mut Frame, view: &ChatView, area: Rect) {
    let palette = &view.palette;
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(border_style(palette.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if view.input_buffer.is_empty() {
        Line::from(vec![
            Span::styled(COMPOSER_ICON, text_style(palette.accent)),
            Span::styled(COMPOSER_PLACEHOLDER, text_muted_style(palette.text_disabled)),
        ])
    } else {
        Line::from(vec![
            Span::styled(COMPOSER_ICON, text_style(palette.accent)),
            Span::styled(view.input_buffer.clone(), text_style(palette.text)),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    let before_cursor = view.input_buffer[..view.input_cursor].width() as u16;
    let cursor_x = inner.x + COMPOSER_ICON.width() as u16 + before_cursor;
    if inner.height > 0 && cursor_x < inner.x + inner.width {
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatfold_core::{ChatMessage, ToolCall, ToolLabels, ToolMetadata};
    use ratatui::{Terminal, backend::TestBackend};

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn screen(view: &mut ChatView, w: u16, h: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal.draw(|f| draw(f, view, f.area())).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..h {
            for x in 0..w {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn collapsed_lines_spaces_messages() {
        let (mut view, _rx) = ChatView::new(ToolMetadata::new());
        view.set_messages(vec![ChatMessage::user("hi"), ChatMessage::assistant("hello", vec![])]);
        let lines = collapsed_lines(&view, 40);
        assert_eq!(lines.len(), 2 + MESSAGE_SPACING_LINES);
        assert!(text_of(&lines[0]).contains("hi"));
        assert!(text_of(lines.last().unwrap()).contains("hello"));
    }

    #[test]
    fn plain_lines_strip_styling() {
        let (mut view, _rx) = ChatView::new(ToolMetadata::new());
        view.set_messages(vec![
            ChatMessage::assistant("", vec![ToolCall::pending("search")]),
            ChatMessage::assistant("ok", vec![]),
        ]);
        let lines = plain_lines(&view, 40);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Running search"));
        assert!(lines[2].ends_with("ok"));
    }

    #[test]
    fn retry_hint_only_on_trailing_error() {
        let (mut view, _rx) = ChatView::new(ToolMetadata::new());
        view.set_messages(vec![ChatMessage::error("first"), ChatMessage::error("second")]);
        let lines = collapsed_lines(&view, 40);
        let hints = lines.iter().filter(|l| text_of(l).contains(RETRY_HINT)).count();
        assert_eq!(hints, 1);
        assert!(text_of(lines.last().unwrap()).contains(RETRY_HINT));
    }

    #[test]
    fn draws_merged_turn_once() {
        let metadata = ToolMetadata::new()
            .with_labels("searchProducts", ToolLabels::new("Searching products", "Found products"));
        let (mut view, _rx) = ChatView::new(metadata);
        view.set_messages(vec![
            ChatMessage::user("find shoes"),
            ChatMessage::assistant("", vec![ToolCall::done("searchProducts")]),
            ChatMessage::assistant("Here are three pairs.", vec![]),
        ]);
        let out = screen(&mut view, 50, 14);
        assert!(out.contains("find shoes"));
        assert!(out.contains("Found products"));
        assert!(out.contains("Here are three pairs."));
        assert_eq!(out.matches('▸').count(), 1);
    }

    #[test]
    fn status_shows_retry_hint_for_trailing_error() {
        let (mut view, _rx) = ChatView::new(ToolMetadata::new());
        view.set_messages(vec![ChatMessage::user("q"), ChatMessage::error("timeout")]);
        let out = screen(&mut view, 50, 10);
        assert!(out.matches(RETRY_HINT).count() >= 2);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let (mut view, _rx) = ChatView::new(ToolMetadata::new());
        view.set_messages(vec![ChatMessage::user("one"), ChatMessage::user("two")]);
        view.scroll_up(100);
        screen(&mut view, 40, 10);
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn top_offset_saturates_on_long_transcripts() {
        assert_eq!(top_offset(10, 3), 7);
        assert_eq!(top_offset(3, 10), 0);
        assert_eq!(top_offset(70_000, 0), u16::MAX);
        assert_eq!(top_offset(70_000, 70_000 - 100), 100);
    }

    #[test]
    fn composer_shows_placeholder_then_input() {
        let (mut view, _rx) = ChatView::new(ToolMetadata::new());
        assert!(screen(&mut view, 50, 8).contains(COMPOSER_PLACEHOLDER));
        for c in "draft".chars() {
            view.input_insert(c);
        }
        let out = screen(&mut view, 50, 8);
        assert!(out.contains("draft"));
        assert!(!out.contains(COMPOSER_PLACEHOLDER));
    }
}
