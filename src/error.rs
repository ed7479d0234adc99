use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the sniffer.
///
/// Empty input is not an error: every detection has a defined fallback for
/// files without a readable line. Only I/O, row parsing and configuration
/// problems end up here.
#[derive(Debug, Error)]
pub enum SnifferError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse row: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl SnifferError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnifferError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SnifferError>;
