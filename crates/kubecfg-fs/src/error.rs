//! Error types for kubecfg-fs

use std::path::PathBuf;

/// Result type for kubecfg-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kubecfg-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `path` is `None` when parsing from an in-memory string
    #[error("Failed to parse kubeconfig{}: {message}", display_path(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("Failed to serialize kubeconfig: {message}")]
    Serialize { message: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}
