// ABOUTME: Utility functions for the gallery-sync application
// ABOUTME: Provides helpers for validation and path handling

use crate::errors::{Result, SyncError};
use std::path::{Component, Path, PathBuf};

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SyncError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(SyncError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Validate that a directory exists
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SyncError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(SyncError::ValidationError(format!(
            "Path is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Get the absolute path
pub fn get_absolute_path(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|e| {
        SyncError::ValidationError(format!("Failed to get absolute path for {:?}: {}", path, e))
    })
}

/// Compute `path` relative to the directory `base`, purely lexically.
/// Both sides drop `.` components before comparison, so the result is
/// identical for the same inputs no matter when it is computed — fragment
/// removal depends on that.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<Component> = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let base_parts: Vec<Component> = base
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let mut common = 0;
    while common < path_parts.len()
        && common < base_parts.len()
        && path_parts[common] == base_parts[common]
    {
        common += 1;
    }

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}
