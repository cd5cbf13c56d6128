//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer failed to parse or a value had the wrong type.
    #[error("failed to read healthaid configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// A `.env` file exists but could not be loaded.
    #[error("failed to load dotenv file at {}: {source}", path.display())]
    Dotenv {
        path: PathBuf,
        source: dotenvy::Error,
    },
}
