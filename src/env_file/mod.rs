use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Default environment file name, used when no environment-specific
/// file applies.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Environment variable naming the runtime environment ("production",
/// "staging", ...).
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Pick the environment file to load under `base_dir`.
///
/// With an environment name, prefers `.env.<name>` when that file exists
/// on disk and falls back to `.env` otherwise. An absent or empty name
/// selects `.env` directly, without touching the filesystem.
///
/// The returned path is not guaranteed to exist — loading is the
/// caller's concern, and a missing file there is a no-op.
pub fn select_env_file(env_name: Option<&str>, base_dir: &Path) -> PathBuf {
    if let Some(name) = env_name.filter(|n| !n.is_empty()) {
        let candidate = base_dir.join(format!("{DEFAULT_ENV_FILE}.{name}"));
        // symlink_metadata so a dangling symlink still counts as present
        if candidate.symlink_metadata().is_ok() {
            return candidate;
        }
        debug!(candidate = %candidate.display(), "environment-specific file absent, falling back");
    }
    base_dir.join(DEFAULT_ENV_FILE)
}

/// Safe-load `path` in mutable mode: values from the file override
/// already-set process variables, and a missing or unparsable file is
/// swallowed rather than raised.
///
/// Returns the path when the file was actually applied.
pub fn load_env_file(path: &Path) -> Option<PathBuf> {
    match dotenvy::from_path_override(path) {
        Ok(()) => Some(path.to_path_buf()),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no environment file applied");
            None
        }
    }
}

/// Boundary entry point: read `APP_ENV` once, select, then safe-load.
///
/// Returns the path that was loaded, or `None` when no file existed at
/// the selected path (the process then runs with the inherited
/// environment).
pub fn bootstrap(base_dir: &Path) -> Option<PathBuf> {
    let app_env = env::var(APP_ENV_VAR).ok();
    let selected = select_env_file(app_env.as_deref(), base_dir);
    load_env_file(&selected)
}
