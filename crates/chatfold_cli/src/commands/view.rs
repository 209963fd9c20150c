//! `chatfold view`: interactive viewer over a transcript.
//!
//! A local source task owns the message sequence: composer sends append a
//! user message, retry drops the trailing error. Each change is pushed to the
//! viewer as a full replacement sequence.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use chatfold_core::ChatMessage;
use chatfold_observability::{init, LogSink, ObservabilityConfig};
use chatfold_tui::theme::{Appearance, ChatPalette};
use chatfold_tui::{run_viewer, ChatView, ViewEvent};
use tokio::sync::mpsc;

use crate::config::{load_metadata, load_transcript};
use crate::output;

pub async fn handle(transcript: &Path, metadata: Option<PathBuf>, theme: &str) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("chatfold view requires an interactive terminal (TTY); use `chatfold render` when piping");
    }
    let appearance: Appearance = theme.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let messages = load_transcript(transcript)?;
    let metadata = load_metadata(metadata)?;

    // Logs go to the status bar instead of the alternate screen.
    let (log_tx, log_rx) = mpsc::unbounded_channel::<String>();
    let log_sink: LogSink = Arc::new(move |line| {
        let _ = log_tx.send(line);
    });
    if let Err(e) = init(ObservabilityConfig::from_env().with_console(false).with_log_sink(log_sink)) {
        output::warning(&format!("Observability init failed (continuing): {e}"));
    }

    let (view, events) = ChatView::new(metadata);
    let mut view = view.with_palette(ChatPalette::for_appearance(appearance));
    view.set_messages(messages.clone());
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let source = tokio::spawn(run_source(messages, events, update_tx));

    let result = run_viewer(&mut view, Some(update_rx), Some(log_rx));
    // closes the event channel so the source task finishes
    drop(view);
    let seen = source.await?;
    result?;

    if !seen.is_empty() {
        output::header("View events");
        for event in &seen {
            match event {
                ViewEvent::Send(text) => output::kv("send", text),
                ViewEvent::Retry => output::kv("retry", "resend requested"),
            }
        }
    }
    Ok(())
}

/// Apply view events to the sequence until the view closes; returns the events seen.
async fn run_source(
    mut messages: Vec<ChatMessage>,
    mut events: mpsc::UnboundedReceiver<ViewEvent>,
    updates: mpsc::UnboundedSender<Vec<ChatMessage>>,
) -> Vec<ViewEvent> {
    let mut seen = Vec::new();
    while let Some(event) = events.recv().await {
        tracing::info!(?event, "view event");
        apply_event(&mut messages, &event);
        seen.push(event);
        if updates.send(messages.clone()).is_err() {
            break;
        }
    }
    seen
}

fn apply_event(messages: &mut Vec<ChatMessage>, event: &ViewEvent) {
    match event {
        ViewEvent::Send(text) => messages.push(ChatMessage::user(text.clone())),
        ViewEvent::Retry => {
            while messages.last().is_some_and(ChatMessage::is_error) {
                messages.pop();
            }
        }
    }
}
