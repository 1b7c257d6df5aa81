use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RehomeError {
    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("Package manager error: {0}")]
    PackageManagerError(String),

    #[error("No removable drives detected")]
    NoDrivesFound,

    #[error("No backup archives found on '{path}'")]
    NoBackupsFound { path: PathBuf },

    #[error("No supported package managers available on this system")]
    NoPackageManagers,

    #[error("Manifest not found at: {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RehomeError>;
