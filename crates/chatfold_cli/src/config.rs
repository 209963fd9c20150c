//! Environment and file configuration for the CLI.
//!
//! Order: `.env` in the current directory or the nearest parent, then process
//! environment. `--metadata` beats `CHATFOLD_TOOL_METADATA`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chatfold_core::{decode_messages, ChatMessage, ToolMetadata};

pub const TOOL_METADATA_ENV: &str = "CHATFOLD_TOOL_METADATA";

/// Load the nearest `.env` walking up from the current directory.
pub fn load_env() {
    let Ok(mut dir) = std::env::current_dir() else {
        return;
    };
    for _ in 0..32 {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            break;
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => break,
        }
    }
}

/// Metadata path from the flag, else from the environment.
pub fn metadata_path(flag: Option<PathBuf>, env_value: Option<String>) -> Option<PathBuf> {
    flag.or_else(|| {
        env_value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Tool metadata for a command; empty when no path is configured.
pub fn load_metadata(flag: Option<PathBuf>) -> Result<ToolMetadata> {
    match metadata_path(flag, std::env::var(TOOL_METADATA_ENV).ok()) {
        Some(path) => ToolMetadata::load(&path)
            .with_context(|| format!("loading tool metadata from {}", path.display())),
        None => Ok(ToolMetadata::new()),
    }
}

pub fn load_transcript(path: &Path) -> Result<Vec<ChatMessage>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading transcript {}", path.display()))?;
    let messages = decode_messages(&text)
        .with_context(|| format!("decoding transcript {}", path.display()))?;
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn flag_beats_env() {
        let path = metadata_path(Some("a.toml".into()), Some("b.toml".into()));
        assert_eq!(path, Some(PathBuf::from("a.toml")));
    }

    #[test]
    fn env_used_when_flag_missing() {
        assert_eq!(metadata_path(None, Some("b.toml".into())), Some(PathBuf::from("b.toml")));
        assert_eq!(metadata_path(None, Some("  ".into())), None);
        assert_eq!(metadata_path(None, None), None);
    }

    #[test]
    fn load_metadata_from_flag() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[search.i18n]\npending = \"Searching\"\ndone = \"Searched\"").unwrap();
        let metadata = load_metadata(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(metadata.len(), 1);
    }

    #[test]
    fn missing_metadata_file_is_an_error() {
        let err = load_metadata(Some("/nonexistent/tools.toml".into())).unwrap_err();
        assert!(err.to_string().contains("loading tool metadata"));
    }

    #[test]
    fn load_transcript_decodes_messages() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"role":"user","content":"hi"}}]"#).unwrap();
        let messages = load_transcript(file.path()).unwrap();
        assert_eq!(messages, vec![ChatMessage::user("hi")]);
    }
}
