// ABOUTME: Sync session module for the gallery-sync application
// ABOUTME: Reacts to created and deleted files by editing the target HTML document

use crate::classify::{classify, FileKind};
use crate::editor;
use crate::errors::{Result, SyncError};
use crate::fragment;
use crate::utils;
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One sync session against a single HTML document. Holds the immutable
/// target path and the fragments inserted so far, keyed by the watched file
/// path. The cache is what makes removal possible for text files whose
/// content is gone by the time the delete event arrives.
pub struct SyncSession {
    html_path: PathBuf,
    fragments: HashMap<PathBuf, String>,
}

impl SyncSession {
    /// Create a session for an existing HTML document. The path is
    /// canonicalized once so that every fragment is derived from the same
    /// base directory.
    pub fn new(html_path: &Path) -> Result<Self> {
        utils::validate_file_exists(html_path)?;
        let html_path = utils::get_absolute_path(html_path)?;

        Ok(Self {
            html_path,
            fragments: HashMap::new(),
        })
    }

    /// The canonical path of the document this session edits.
    pub fn html_path(&self) -> &Path {
        &self.html_path
    }

    /// Handle a file appearing in the watched folder.
    pub fn handle_created(&mut self, path: &Path) -> Result<()> {
        let tag = match classify(path) {
            FileKind::Ignored => {
                debug!("Ignoring created file {:?}", path);
                return Ok(());
            }
            FileKind::Image => {
                info!("New image detected: {:?}", path);
                let tag = fragment::build_image_tag(path, &self.html_path);
                info!("Adding image tag to HTML: {}", tag.trim_end());
                tag
            }
            FileKind::Text => {
                info!("New text file detected: {:?}", path);
                let tag = fragment::build_text_tag(path)?;
                info!("Adding text to HTML: {}", tag.trim_end());
                tag
            }
        };

        editor::insert_fragment(&self.html_path, &tag)?;

        // Remember the exact inserted string; only after a successful insert,
        // so the cache never claims a fragment the document does not have.
        self.fragments.insert(path.to_path_buf(), tag);
        Ok(())
    }

    /// Handle a file disappearing from the watched folder. Prefers the
    /// fragment cached at creation time; on a cache miss the image tag is
    /// rebuilt deterministically, while text content is re-read if the file
    /// is somehow still readable.
    pub fn handle_deleted(&mut self, path: &Path) -> Result<()> {
        let kind = classify(path);
        match kind {
            FileKind::Ignored => {
                debug!("Ignoring deleted file {:?}", path);
                return Ok(());
            }
            FileKind::Image => info!("Image deleted: {:?}", path),
            FileKind::Text => info!("Text file deleted: {:?}", path),
        }

        let tag = match self.fragments.remove(path) {
            Some(tag) => tag,
            None => match kind {
                FileKind::Image => fragment::build_image_tag(path, &self.html_path),
                _ => fragment::build_text_tag(path)
                    .map_err(|_| SyncError::UnreadableDeletedFile(path.to_path_buf()))?,
            },
        };

        info!("Removing fragment from HTML: {}", tag.trim_end());
        let removed = editor::remove_fragment(&self.html_path, &tag)?;
        if !removed {
            debug!("No matching fragment for {:?}", path);
        }
        Ok(())
    }
}
