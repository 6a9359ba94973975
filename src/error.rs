//! Error types for tidywatch.

use thiserror::Error;

/// Main error type for tidywatch operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Watched directory unavailable: {path}: {source}")]
    WatchRoot {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {reason}")]
    Configuration { reason: String },

    #[error("Path mapping error: {reason}")]
    PathMapping { reason: String },

    #[error("Report not found: {id}")]
    ReportNotFound { id: String },
}

/// Result type alias for tidywatch operations
pub type Result<T> = std::result::Result<T, Error>;
