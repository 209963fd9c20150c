//! User message rendering.
//!
//! Layout: left border + `»` indicator + text; continuation lines keep the
//! border and indent by two spaces.

use chatfold_core::UserMessage;
use ratatui::text::{Line, Span};

use crate::style::text_style;
use crate::theme::ChatPalette;
use crate::utils::{wrap_lines, LEFT_PADDING};

/// Indicator shown before user message (accent color).
pub const USER_INDICATOR: &str = "»";

const USER_LEFT_BORDER: &str = "│ ";

pub fn user_message_lines(msg: &UserMessage, palette: &ChatPalette, width: usize) -> Vec<Line<'static>> {
    let indent_len = LEFT_PADDING.len() + USER_LEFT_BORDER.len();
    let wrap_width = width.saturating_sub(indent_len).max(1);
    let wrapped = wrap_lines(&msg.content, wrap_width);
    let border_span = Span::styled(USER_LEFT_BORDER.to_string(), text_style(palette.accent));
    let indicator = Span::styled(USER_INDICATOR.to_string(), text_style(palette.accent));

    let Some((first, rest)) = wrapped.split_first() else {
        return vec![Line::from(vec![border_span, indicator, Span::raw(" ")])];
    };

    let mut lines = Vec::with_capacity(wrapped.len());
    lines.push(Line::from(vec![
        border_span.clone(),
        indicator,
        Span::raw(" "),
        Span::styled(first.clone(), text_style(palette.text)),
    ]));
    for seg in rest {
        lines.push(Line::from(vec![
            border_span.clone(),
            Span::raw(LEFT_PADDING),
            Span::styled(seg.clone(), text_style(palette.text)),
        ]));
    }
    lines
}
