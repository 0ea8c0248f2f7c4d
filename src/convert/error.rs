use std::path::PathBuf;

/// Errors produced while scanning for and converting stylesheets.
///
/// `Scan` is fatal for a run. The per-file variants are reported and counted
/// but never stop sibling files from being converted. Their messages omit the
/// path, which the caller's report line names.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to scan directory {root}")]
    Scan {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("read failed: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write failed: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("conversion task did not complete: {message}")]
    TaskFailed { path: PathBuf, message: String },

    #[error("worker pool did not complete: {message}")]
    WorkerPool { message: String },
}

/// Result type alias using ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;
