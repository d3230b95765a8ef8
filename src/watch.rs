// ABOUTME: Watch module for monitoring a folder and syncing it into the HTML page
// ABOUTME: Provides the blocking event loop, event dispatch and clean shutdown

use log::{debug, error, info};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use notify::event::{CreateKind, RemoveKind};
use notify::{EventKind, RecursiveMode, Watcher};
use notify_debouncer_full::{new_debouncer, DebounceEventResult, DebouncedEvent};

use crate::errors::{Result, SyncError};
use crate::sync::SyncSession;
use crate::utils;

/// Configuration for watch mode
pub struct WatchConfig {
    /// Directory whose entries are mirrored into the HTML page
    pub watch_folder: PathBuf,

    /// Target HTML file
    pub html_file: PathBuf,

    /// Debounce time in milliseconds
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            watch_folder: PathBuf::new(),
            html_file: PathBuf::new(),
            debounce_ms: 500,
        }
    }
}

/// Everything the wait loop can receive: debounced filesystem events or the
/// interrupt signal.
enum WatchSignal {
    Fs(DebounceEventResult),
    Shutdown,
}

/// Watch a folder and keep the HTML document in sync until interrupted.
/// Failure to establish the watch is fatal; anything that goes wrong while
/// handling a single event is logged and the loop keeps running.
pub fn watch_folder(config: WatchConfig) -> Result<()> {
    utils::validate_directory_exists(&config.watch_folder)?;
    utils::validate_file_exists(&config.html_file)?;

    let mut session = SyncSession::new(&config.html_file)?;

    // One channel carries both event batches and the shutdown signal, so the
    // loop below blocks on a single receiver.
    let (tx, rx) = mpsc::channel();

    let fs_tx = tx.clone();
    let mut debouncer = new_debouncer(
        Duration::from_millis(config.debounce_ms),
        None,
        move |result: DebounceEventResult| {
            let _ = fs_tx.send(WatchSignal::Fs(result));
        },
    )
    .map_err(|e| SyncError::WatchError(format!("Failed to create file watcher: {}", e)))?;

    // Ensure we're using an absolute path for watching
    let abs_watch_path = utils::get_absolute_path(&config.watch_folder)?;
    debug!("Watching absolute path: {:?}", abs_watch_path);

    debouncer
        .watcher()
        .watch(&abs_watch_path, RecursiveMode::NonRecursive)
        .map_err(|e| {
            SyncError::WatchError(format!(
                "Failed to start watching directory {:?}: {}",
                abs_watch_path, e
            ))
        })?;

    ctrlc::set_handler(move || {
        let _ = tx.send(WatchSignal::Shutdown);
    })
    .map_err(|e| SyncError::WatchError(format!("Failed to install interrupt handler: {}", e)))?;

    info!("Watching for changes in {:?}", config.watch_folder);
    println!(
        "Watching for changes in {:?} (Press Ctrl+C to stop)",
        config.watch_folder
    );

    for signal in rx {
        match signal {
            WatchSignal::Shutdown => {
                info!("Interrupt received, stopping watch");
                break;
            }
            WatchSignal::Fs(Ok(events)) => {
                for event in &events {
                    dispatch_event(&mut session, event);
                }
            }
            WatchSignal::Fs(Err(errors)) => {
                for e in errors {
                    error!("Watch error: {:?}", e);
                }
            }
        }
    }

    // Dropping the debouncer releases the directory watch.
    drop(debouncer);
    Ok(())
}

/// Route one debounced event to the session. Directories and event kinds
/// other than create/remove are ignored.
fn dispatch_event(session: &mut SyncSession, event: &DebouncedEvent) {
    match event.kind {
        EventKind::Create(CreateKind::Folder) => {
            debug!("Ignoring created directory: {:?}", event.paths);
        }
        EventKind::Create(_) => {
            for path in &event.paths {
                if path.is_dir() {
                    debug!("Ignoring created directory: {:?}", path);
                    continue;
                }
                if let Err(e) = session.handle_created(path) {
                    error!("Failed to handle created file {:?}: {}", path, e);
                }
            }
        }
        EventKind::Remove(RemoveKind::Folder) => {
            debug!("Ignoring removed directory: {:?}", event.paths);
        }
        EventKind::Remove(_) => {
            for path in &event.paths {
                if let Err(e) = session.handle_deleted(path) {
                    error!("Failed to handle deleted file {:?}: {}", path, e);
                }
            }
        }
        _ => {
            debug!("Ignoring event: {:?}", event.kind);
        }
    }
}
