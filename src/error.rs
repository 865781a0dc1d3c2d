use thiserror::Error;

/// Unified error type for commit-bump operations
#[derive(Error, Debug)]
pub enum CommitBumpError {
    #[error("Message '{message}' does not match the expected pattern '{pattern}'")]
    Conformance { message: String, pattern: String },

    #[error("No matching bump type found for message: {message}")]
    NoMatch { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in commit-bump
pub type Result<T> = std::result::Result<T, CommitBumpError>;

impl CommitBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CommitBumpError::Config(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        CommitBumpError::Pattern(msg.into())
    }

    /// Create a conformance error for a message that failed the combined check
    pub fn conformance(message: impl Into<String>, pattern: impl Into<String>) -> Self {
        CommitBumpError::Conformance {
            message: message.into(),
            pattern: pattern.into(),
        }
    }

    /// Create a no-match error for a message outside every keyword group
    pub fn no_match(message: impl Into<String>) -> Self {
        CommitBumpError::NoMatch {
            message: message.into(),
        }
    }
}
