//! Chat view state: source messages, their collapsed form, composer, scroll.
//!
//! The message source replaces the whole sequence on every update
//! ([ChatView::set_messages]); the collapsed view is recomputed each time.
//! Outgoing signals (send, retry) go up through a [ViewEvent] channel.

use chatfold_core::{collapse, ChatMessage, ToolMetadata};
use tokio::sync::mpsc;

use crate::theme::ChatPalette;

/// Signals raised by the view for the message source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The composer submitted a message.
    Send(String),
    /// Resend the turn that ended in the trailing error.
    Retry,
}

#[derive(Debug)]
pub struct ChatView {
    source: Vec<ChatMessage>,
    collapsed: Vec<ChatMessage>,
    events: mpsc::UnboundedSender<ViewEvent>,
    pub metadata: ToolMetadata,
    pub palette: ChatPalette,
    /// Composer text.
    pub input_buffer: String,
    /// Byte offset of the cursor within input_buffer (0..=len, on a char boundary).
    pub input_cursor: usize,
    /// Lines scrolled up from the bottom.
    pub scroll: usize,
    /// Keep the newest message in view on updates.
    pub auto_scroll: bool,
    /// Status bar text (last log line, retry notice, ...).
    pub status: String,
    pub frame_count: u64,
    pub needs_redraw: bool,
}

impl ChatView {
    pub fn new(metadata: ToolMetadata) -> (Self, mpsc::UnboundedReceiver<ViewEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let view = Self {
            source: Vec::new(),
            collapsed: Vec::new(),
            events,
            metadata,
            palette: ChatPalette::default(),
            input_buffer: String::new(),
            input_cursor: 0,
            scroll: 0,
            auto_scroll: true,
            status: String::new(),
            frame_count: 0,
            needs_redraw: true,
        };
        (view, rx)
    }

    pub fn with_palette(mut self, palette: ChatPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the source sequence and recompute the collapsed view.
    pub fn set_messages(&mut self, messages: Vec<ChatMessage>) {
        self.source = messages;
        self.recompute();
    }

    /// Append one message to the source sequence and recompute.
    pub fn push_message(&mut self, message: ChatMessage) {
        self.source.push(message);
        self.recompute();
    }

    /// Collapsed messages, as rendered.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.collapsed
    }

    /// Messages as last delivered by the source.
    pub fn source(&self) -> &[ChatMessage] {
        &self.source
    }

    fn recompute(&mut self) {
        self.collapsed = collapse(&self.source);
        if self.auto_scroll {
            self.scroll = 0;
        }
        self.needs_redraw = true;
    }

    /// Retry is offered only while the last collapsed message is an error.
    pub fn can_retry(&self) -> bool {
        self.collapsed.last().is_some_and(ChatMessage::is_error)
    }

    /// Raise [ViewEvent::Retry] if retry is available. Returns whether it was sent.
    pub fn retry(&mut self) -> bool {
        if !self.can_retry() {
            return false;
        }
        tracing::info!("retry requested");
        self.status = "Retrying…".to_string();
        self.needs_redraw = true;
        self.emit(ViewEvent::Retry)
    }

    /// Send the composer text as [ViewEvent::Send] and clear it.
    /// Blank input is ignored and returns false.
    pub fn submit(&mut self) -> bool {
        let line = self.input_take();
        let text = line.trim();
        if text.is_empty() {
            return false;
        }
        self.auto_scroll = true;
        self.scroll = 0;
        self.emit(ViewEvent::Send(text.to_string()))
    }

    fn emit(&self, event: ViewEvent) -> bool {
        match self.events.send(event) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(event = ?e.0, "view event dropped, receiver closed");
                false
            }
        }
    }

    /// Insert a character at the cursor.
    pub fn input_insert(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    /// Delete the character before the cursor (UTF-8 safe).
    pub fn input_backspace(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let prev = self.input_buffer[..self.input_cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.input_buffer.replace_range(prev..self.input_cursor, "");
        self.input_cursor = prev;
        self.needs_redraw = true;
    }

    pub fn input_cursor_left(&mut self) {
        if let Some((i, _)) = self.input_buffer[..self.input_cursor].char_indices().next_back() {
            self.input_cursor = i;
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_right(&mut self) {
        if let Some(c) = self.input_buffer[self.input_cursor..].chars().next() {
            self.input_cursor += c.len_utf8();
            self.needs_redraw = true;
        }
    }

    /// Clear and return the composer text.
    pub fn input_take(&mut self) -> String {
        self.input_cursor = 0;
        self.needs_redraw = true;
        std::mem::take(&mut self.input_buffer)
    }

    /// Scroll up (increase offset); disables auto_scroll.
    pub fn scroll_up(&mut self, delta: usize) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll down (decrease offset); re-enables auto_scroll at the bottom.
    pub fn scroll_down(&mut self, delta: usize) {
        self.scroll = self.scroll.saturating_sub(delta);
        if self.scroll == 0 {
            self.auto_scroll = true;
        }
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatfold_core::ToolCall;

    fn view() -> (ChatView, mpsc::UnboundedReceiver<ViewEvent>) {
        ChatView::new(ToolMetadata::new())
    }

    #[test]
    fn set_messages_recomputes_collapsed() {
        let (mut v, _rx) = view();
        v.set_messages(vec![
            ChatMessage::user("q"),
            ChatMessage::assistant("", vec![ToolCall::pending("A")]),
        ]);
        assert_eq!(v.messages().len(), 2);

        v.set_messages(vec![
            ChatMessage::user("q"),
            ChatMessage::assistant("", vec![ToolCall::done("A")]),
            ChatMessage::assistant("ans", vec![]),
        ]);
        assert_eq!(v.source().len(), 3);
        assert_eq!(v.messages().len(), 2);
        assert_eq!(v.messages()[1].content(), "ans");
    }

    #[test]
    fn push_message_merges_into_open_run() {
        let (mut v, _rx) = view();
        v.push_message(ChatMessage::assistant("", vec![ToolCall::pending("A")]));
        v.push_message(ChatMessage::assistant("", vec![ToolCall::pending("B")]));
        assert_eq!(v.messages().len(), 1);
        assert_eq!(v.messages()[0].tool_calls().len(), 2);
        v.push_message(ChatMessage::error("boom"));
        assert_eq!(v.messages().len(), 2);
        assert!(v.can_retry());
    }

    #[test]
    fn retry_only_when_last_is_error() {
        let (mut v, mut rx) = view();
        v.set_messages(vec![ChatMessage::user("q"), ChatMessage::error("timeout")]);
        assert!(v.can_retry());
        assert!(v.retry());
        assert_eq!(rx.try_recv().unwrap(), ViewEvent::Retry);

        v.set_messages(vec![
            ChatMessage::error("old"),
            ChatMessage::user("q"),
        ]);
        assert!(!v.can_retry());
        assert!(!v.retry());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn retry_on_empty_view_is_noop() {
        let (mut v, mut rx) = view();
        assert!(!v.retry());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submit_sends_trimmed_text() {
        let (mut v, mut rx) = view();
        for c in "  hello ".chars() {
            v.input_insert(c);
        }
        assert!(v.submit());
        assert_eq!(rx.try_recv().unwrap(), ViewEvent::Send("hello".into()));
        assert!(v.input_buffer.is_empty());
        assert_eq!(v.input_cursor, 0);
    }

    #[test]
    fn submit_blank_is_ignored() {
        let (mut v, mut rx) = view();
        v.input_insert(' ');
        assert!(!v.submit());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submit_after_receiver_dropped() {
        let (mut v, rx) = view();
        drop(rx);
        v.input_insert('x');
        assert!(!v.submit());
    }

    #[test]
    fn input_editing_is_utf8_safe() {
        let (mut v, _rx) = view();
        for c in "aé世".chars() {
            v.input_insert(c);
        }
        v.input_cursor_left();
        v.input_backspace();
        assert_eq!(v.input_buffer, "a世");
        v.input_cursor_right();
        assert_eq!(v.input_cursor, v.input_buffer.len());
        v.input_backspace();
        v.input_backspace();
        v.input_backspace();
        assert!(v.input_buffer.is_empty());
    }

    #[test]
    fn scroll_toggles_auto_scroll() {
        let (mut v, _rx) = view();
        v.scroll_up(3);
        assert!(!v.auto_scroll);
        v.set_messages(vec![ChatMessage::user("new")]);
        assert_eq!(v.scroll, 3);
        v.scroll_down(5);
        assert_eq!(v.scroll, 0);
        assert!(v.auto_scroll);
    }
}
