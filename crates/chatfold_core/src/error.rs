use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatfoldError {
    #[error("unknown message role {role:?} at index {index}")]
    UnknownRole { index: usize, role: String },

    #[error("capability not found: {0}")]
    CapabilityNotFound(String),

    #[error("capability already registered: {0}")]
    DuplicateCapability(String),

    #[error("capability is not callable: {0}")]
    NotCallable(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ChatfoldError>;
