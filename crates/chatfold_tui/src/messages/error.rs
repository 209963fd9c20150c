//! Inline error message rendering (✗ icon, danger style, optional retry hint).

use chatfold_core::ErrorMessage;
use ratatui::text::{Line, Span};

use crate::style::{danger_style, key_hint_style, text_muted_style};
use crate::theme::ChatPalette;
use crate::utils::{wrap_lines, LEFT_PADDING};

pub const ERROR_ICON: &str = "✗";

pub const RETRY_HINT: &str = "[r] Retry";

/// Build lines for an error message. `show_retry` adds the retry hint; the
/// view sets it only for the last message.
pub fn error_message_lines(
    msg: &ErrorMessage,
    palette: &ChatPalette,
    width: usize,
    show_retry: bool,
) -> Vec<Line<'static>> {
    let style = danger_style(palette.danger);
    let wrap_width = width.saturating_sub(LEFT_PADDING.len()).max(1);
    let wrapped = wrap_lines(&msg.content, wrap_width);

    let mut lines = Vec::with_capacity(wrapped.len() + 1);
    let mut first = vec![Span::styled(format!("{ERROR_ICON} "), style)];
    if let Some(text) = wrapped.first() {
        first.push(Span::styled(text.clone(), style));
    }
    lines.push(Line::from(first));
    for seg in wrapped.iter().skip(1) {
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(seg.clone(), style),
        ]));
    }

    if show_retry {
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(RETRY_HINT, key_hint_style(palette.accent)),
            Span::styled(" resend the last message", text_muted_style(palette.text_muted)),
        ]));
    }
    lines
}
