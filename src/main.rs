mod config;
mod env_file;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use config::Config;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Base directory for env-file lookup: parent of the directory holding
/// the executable, falling back to the working directory.
fn base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent()?.parent().map(PathBuf::from))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> Result<()> {
    // Env file before the subscriber, so a RUST_LOG set in the file
    // steers filtering.
    let loaded = env_file::bootstrap(&base_dir());
    init_tracing();

    let config = Config::global()?;
    match &loaded {
        Some(path) => info!(path = %path.display(), "environment file loaded"),
        None => debug!("no environment file found, using inherited environment"),
    }
    info!(
        app_env = config.app_env.as_deref().unwrap_or("default"),
        log_level = %config.log_level,
        "envboot ready"
    );

    Ok(())
}
