// ABOUTME: Error types for the gallery-sync application
// ABOUTME: Provides structured error handling for classification, editing and watching

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to write file {path:?}: {source}")]
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No </body> tag found in HTML file: {0:?}")]
    AnchorNotFound(PathBuf),

    #[error("Cannot rebuild fragment for deleted file: {0:?}")]
    UnreadableDeletedFile(PathBuf),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Watch error: {0}")]
    WatchError(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;
