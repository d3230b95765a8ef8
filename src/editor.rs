// ABOUTME: Document editing module for the gallery-sync application
// ABOUTME: Performs substring insertion and removal against the target HTML file

use crate::errors::{Result, SyncError};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// The literal insertion point in the HTML document. The document is expected
/// to contain exactly one occurrence.
pub const BODY_ANCHOR: &str = "</body>";

/// Insert `fragment` immediately before the first `</body>` in the document
/// and rewrite the file in full. Returns `AnchorNotFound` without touching
/// the file when the anchor is absent.
pub fn insert_fragment(html_path: &Path, fragment: &str) -> Result<()> {
    let content = fs::read_to_string(html_path)?;

    let anchor = content
        .find(BODY_ANCHOR)
        .ok_or_else(|| SyncError::AnchorNotFound(html_path.to_path_buf()))?;

    let mut updated = String::with_capacity(content.len() + fragment.len());
    updated.push_str(&content[..anchor]);
    updated.push_str(fragment);
    updated.push_str(&content[anchor..]);

    write_document(html_path, &updated)?;
    info!("Updated HTML file: {:?}", html_path);
    Ok(())
}

/// Remove the first literal occurrence of `fragment` from the document and
/// rewrite the file in full. A document that does not contain the fragment is
/// left untouched; returns whether anything was removed.
pub fn remove_fragment(html_path: &Path, fragment: &str) -> Result<bool> {
    let content = fs::read_to_string(html_path)?;

    match content.find(fragment) {
        Some(start) => {
            let mut updated = String::with_capacity(content.len() - fragment.len());
            updated.push_str(&content[..start]);
            updated.push_str(&content[start + fragment.len()..]);

            write_document(html_path, &updated)?;
            info!("Updated HTML file: {:?}", html_path);
            Ok(true)
        }
        None => {
            debug!("Fragment not present in {:?}, nothing to remove", html_path);
            Ok(false)
        }
    }
}

fn write_document(html_path: &Path, content: &str) -> Result<()> {
    fs::write(html_path, content).map_err(|e| SyncError::FileWriteError {
        path: html_path.to_path_buf(),
        source: e,
    })
}
