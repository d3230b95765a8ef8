// ABOUTME: Fragment building module for the gallery-sync application
// ABOUTME: Derives the exact markup string inserted into the page for a watched file

use crate::errors::Result;
use crate::utils;
use log::info;
use std::fs;
use std::path::Path;

/// Build the image tag for `file_path`, referenced relative to the directory
/// containing `html_path`. Insertion and removal both call this with the same
/// inputs, so the string matches byte for byte.
pub fn build_image_tag(file_path: &Path, html_path: &Path) -> String {
    let html_dir = match html_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let relative_path = utils::relative_to(file_path, html_dir);
    format!("<img src=\"{}\" alt=\"Image\">\n", relative_path.display())
}

/// Build the paragraph tag for a text file by reading its full content.
/// The file must still be readable; for deleted files the caller falls back
/// to the fragment cached at creation time.
pub fn build_text_tag(file_path: &Path) -> Result<String> {
    info!("Reading text content from {:?}", file_path);
    let content = fs::read_to_string(file_path)?;
    Ok(format!("<p>{}</p>\n", content))
}
