//! `chatfold labels`: resolve the chip labels for one tool.

use std::path::PathBuf;

use anyhow::Result;
use chatfold_core::resolve_labels;

use crate::config::load_metadata;
use crate::output;

pub fn handle(tool: &str, metadata: Option<PathBuf>) -> Result<()> {
    let metadata = load_metadata(metadata)?;
    let labels = resolve_labels(&metadata, tool);

    if output::is_json() {
        output::data(tool, &labels);
    } else {
        output::header(&format!("Tool: {tool}"));
        output::kv("pending", &labels.pending);
        output::kv("done", &labels.done);
    }
    Ok(())
}
