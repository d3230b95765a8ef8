use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use gallery_sync::{SyncError, SyncSession};

const EMPTY_PAGE: &str = "<html><body></body></html>";

/// Create a temp directory holding an index.html with the given content.
/// The directory path is canonicalized so session paths and event paths
/// share the same base.
fn setup_page(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir
        .path()
        .canonicalize()
        .expect("Failed to canonicalize temp dir");
    let html_path = root.join("index.html");
    fs::write(&html_path, content).expect("Failed to write HTML file");
    (temp_dir, root, html_path)
}

fn read_page(html_path: &Path) -> String {
    fs::read_to_string(html_path).expect("Failed to read HTML file")
}

#[test]
fn test_created_image_is_inserted_before_body_close() {
    let (_temp, root, html_path) = setup_page(EMPTY_PAGE);
    let mut session = SyncSession::new(&html_path).expect("Failed to create session");

    let photo = root.join("photo.jpg");
    fs::write(&photo, b"jpegdata").expect("Failed to write image");

    session.handle_created(&photo).expect("Create handling failed");

    assert_eq!(
        read_page(&html_path),
        "<html><body><img src=\"photo.jpg\" alt=\"Image\">\n</body></html>"
    );
}

#[test]
fn test_image_in_subfolder_uses_relative_path() {
    let (_temp, root, html_path) = setup_page(EMPTY_PAGE);
    let mut session = SyncSession::new(&html_path).expect("Failed to create session");

    let archive = root.join("archive");
    fs::create_dir(&archive).expect("Failed to create archive dir");
    let photo = archive.join("photo.jpg");
    fs::write(&photo, b"jpegdata").expect("Failed to write image");

    session.handle_created(&photo).expect("Create handling failed");

    assert_eq!(
        read_page(&html_path),
        "<html><body><img src=\"archive/photo.jpg\" alt=\"Image\">\n</body></html>"
    );
}

#[test]
fn test_text_create_then_delete_round_trip() {
    let (_temp, root, html_path) = setup_page(EMPTY_PAGE);
    let mut session = SyncSession::new(&html_path).expect("Failed to create session");

    let note = root.join("note.txt");
    fs::write(&note, "hello").expect("Failed to write note");

    session.handle_created(&note).expect("Create handling failed");
    assert_eq!(
        read_page(&html_path),
        "<html><body><p>hello</p>\n</body></html>"
    );

    // The file is gone by the time the delete event arrives; removal relies
    // on the fragment cached at creation time.
    fs::remove_file(&note).expect("Failed to delete note");
    session.handle_deleted(&note).expect("Delete handling failed");

    assert_eq!(read_page(&html_path), EMPTY_PAGE);
}

#[test]
fn test_image_create_then_delete_round_trip() {
    let (_temp, root, html_path) = setup_page(EMPTY_PAGE);
    let mut session = SyncSession::new(&html_path).expect("Failed to create session");

    let photo = root.join("photo.jpg");
    fs::write(&photo, b"jpegdata").expect("Failed to write image");

    session.handle_created(&photo).expect("Create handling failed");
    fs::remove_file(&photo).expect("Failed to delete image");
    session.handle_deleted(&photo).expect("Delete handling failed");

    assert_eq!(read_page(&html_path), EMPTY_PAGE);
}

#[test]
fn test_deleted_image_without_cached_fragment_is_rebuilt() {
    // Simulates a file that existed before the session started: the image
    // tag is deterministic, so removal works without a cache entry.
    let (_temp, root, html_path) = setup_page(
        "<html><body><img src=\"photo.jpg\" alt=\"Image\">\n</body></html>",
    );
    let mut session = SyncSession::new(&html_path).expect("Failed to create session");

    let photo = root.join("photo.jpg");
    session.handle_deleted(&photo).expect("Delete handling failed");

    assert_eq!(read_page(&html_path), EMPTY_PAGE);
}

#[test]
fn test_deleted_text_without_cached_fragment_is_reported() {
    let original = "<html><body><p>hello</p>\n</body></html>";
    let (_temp, root, html_path) = setup_page(original);
    let mut session = SyncSession::new(&html_path).expect("Failed to create session");

    // No cache entry and no file left to read, so the fragment cannot be
    // rebuilt. The document must stay as it is.
    let note = root.join("note.txt");
    let result = session.handle_deleted(&note);

    assert!(matches!(result, Err(SyncError::UnreadableDeletedFile(_))));
    assert_eq!(read_page(&html_path), original);
}

#[test]
fn test_ignored_extension_leaves_document_unchanged() {
    let (_temp, root, html_path) = setup_page(EMPTY_PAGE);
    let mut session = SyncSession::new(&html_path).expect("Failed to create session");

    let archive = root.join("archive.zip");
    fs::write(&archive, b"zipdata").expect("Failed to write archive");

    session.handle_created(&archive).expect("Create handling failed");
    session.handle_deleted(&archive).expect("Delete handling failed");

    assert_eq!(read_page(&html_path), EMPTY_PAGE);
}

#[test]
fn test_sequential_image_creates_append_in_delivery_order() {
    let (_temp, root, html_path) = setup_page(EMPTY_PAGE);
    let mut session = SyncSession::new(&html_path).expect("Failed to create session");

    for name in ["a.png", "b.png", "c.png"] {
        let path = root.join(name);
        fs::write(&path, b"pngdata").expect("Failed to write image");
        session.handle_created(&path).expect("Create handling failed");
    }

    assert_eq!(
        read_page(&html_path),
        "<html><body>\
         <img src=\"a.png\" alt=\"Image\">\n\
         <img src=\"b.png\" alt=\"Image\">\n\
         <img src=\"c.png\" alt=\"Image\">\n\
         </body></html>"
    );
}

#[test]
fn test_create_without_anchor_reports_and_skips() {
    let original = "<html><div>not a real page</div></html>";
    let (_temp, root, html_path) = setup_page(original);
    let mut session = SyncSession::new(&html_path).expect("Failed to create session");

    let photo = root.join("photo.jpg");
    fs::write(&photo, b"jpegdata").expect("Failed to write image");

    let result = session.handle_created(&photo);
    assert!(matches!(result, Err(SyncError::AnchorNotFound(_))));
    assert_eq!(read_page(&html_path), original);

    // The failed insert must not have cached anything; the delete is a
    // silent no-op.
    fs::remove_file(&photo).expect("Failed to delete image");
    session.handle_deleted(&photo).expect("Delete handling failed");
    assert_eq!(read_page(&html_path), original);
}

#[test]
fn test_session_requires_existing_html_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("missing.html");

    let result = SyncSession::new(&missing);
    assert!(matches!(result, Err(SyncError::PathNotFoundError(_))));
}
