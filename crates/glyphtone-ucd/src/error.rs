use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum UcdError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}
