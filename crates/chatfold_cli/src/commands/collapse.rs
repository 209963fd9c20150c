//! `chatfold collapse`: print the collapsed transcript.

use std::path::Path;

use anyhow::Result;
use chatfold_core::collapse;

use crate::config::load_transcript;
use crate::output;

pub fn handle(transcript: &Path) -> Result<()> {
    let messages = load_transcript(transcript)?;
    let collapsed = collapse(&messages);
    tracing::info!(input = messages.len(), output = collapsed.len(), "collapsed transcript");
    output::data("collapsed", &collapsed);
    Ok(())
}
