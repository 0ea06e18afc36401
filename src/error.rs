use thiserror::Error;

/// Unified error type for git-bump operations
#[derive(Error, Debug)]
pub enum GitBumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Tag '{0}' already exists")]
    TagExists(String),

    #[error("Tag error: {0}")]
    Tag(String),
}

/// Convenience type alias for Results in git-bump
pub type Result<T> = std::result::Result<T, GitBumpError>;

impl GitBumpError {
    /// Create a repository access error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        GitBumpError::Repository(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitBumpError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitBumpError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        GitBumpError::Tag(msg.into())
    }

    /// Create an error for a tag name that is already taken
    pub fn tag_exists(name: impl Into<String>) -> Self {
        GitBumpError::TagExists(name.into())
    }
}
