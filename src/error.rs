use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'venv' directory not found in {0}")]
    VenvMissing(PathBuf),

    #[error("Launcher executable has no containing directory: {0}")]
    LauncherDirUnavailable(PathBuf),

    #[error("Cannot place {0} on PATH: {1}")]
    UnusablePath(PathBuf, std::env::JoinPathsError),

    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
