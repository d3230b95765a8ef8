// ABOUTME: File classification module for the gallery-sync application
// ABOUTME: Maps a file path to Image, Text or Ignored based on its extension

use std::path::Path;

/// Extensions treated as images, matched case-insensitively.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// The kind of watched file, derived purely from the path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Text,
    Ignored,
}

/// Classify a path by its extension. Only the extension is lowercased;
/// the rest of the path is never inspected.
pub fn classify(path: &Path) -> FileKind {
    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return FileKind::Ignored,
    };

    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        FileKind::Image
    } else if ext == "txt" {
        FileKind::Text
    } else {
        FileKind::Ignored
    }
}
