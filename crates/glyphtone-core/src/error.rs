use std::path::PathBuf;

/// Errors from the public conversion entry points.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("invalid code point: {0:?}")]
    InvalidCodePoint(String),
    #[error("unknown channel: {0:?}")]
    UnknownChannel(String),
}

/// Errors while loading conversion parameters.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed parameter file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{channel} {field} must be finite, got {value}")]
    NonFinite {
        channel: &'static str,
        field: &'static str,
        value: f64,
    },
}
