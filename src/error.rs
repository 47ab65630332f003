//! Typed error types for copycheck.

/// All errors produced by the copycheck library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Resolved content is empty or all-whitespace; nothing was checked.
    #[error("{0} is empty")]
    EmptyContent(&'static str),

    /// A structural precondition of a skill document failed. The skill
    /// validator stops at the first one, so this carries a single message.
    #[error("{0}")]
    Structure(String),
}

/// A `Result` alias where the error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
