use thiserror::Error;

/// Navigation defects caught before they reach the host router.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// A route template was passed where an interpolated path was expected.
    #[error("refusing to navigate to unresolved template path `{path}`")]
    UnresolvedTemplate { path: String },
}

/// Errors raised while loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    /// `history.max_entries` must be greater than 0.
    #[error("invalid history capacity: must be greater than 0")]
    InvalidHistoryCapacity,

    /// `session.start_path` still holds a `[param]` placeholder.
    #[error("start path `{0}` is an unresolved template")]
    UnresolvedStartPath(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
