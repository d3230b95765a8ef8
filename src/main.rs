// ABOUTME: Main entry point for the gallery-sync program.
// ABOUTME: Provides the CLI interface and starts the folder watch.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use gallery_sync::Config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to watch for created and deleted files
    #[arg(short, long)]
    folder: Option<PathBuf>,

    /// HTML file to keep in sync with the folder
    #[arg(long)]
    html: Option<PathBuf>,

    /// Debounce time in milliseconds for filesystem events
    #[arg(long)]
    debounce_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::from_env();
    let watch_config = config.get_watch_config(cli.folder, cli.html, cli.debounce_ms);

    println!(
        "Starting monitoring of folder: {:?}",
        watch_config.watch_folder
    );

    gallery_sync::watch_folder(watch_config).context("Folder watch failed")?;
    Ok(())
}
