//! `chatfold render`: print the chat view as plain text lines.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chatfold_tui::{plain_lines, ChatView};

use crate::config::{load_metadata, load_transcript};
use crate::output;

pub fn handle(transcript: &Path, metadata: Option<PathBuf>, width: usize) -> Result<()> {
    let messages = load_transcript(transcript)?;
    let metadata = load_metadata(metadata)?;

    let (mut view, _events) = ChatView::new(metadata);
    view.set_messages(messages);
    output::lines("rendered", &plain_lines(&view, width.max(1)));
    Ok(())
}
