mod config;
pub mod snapshot;

pub use config::{AgendaConfig, Config};
pub use snapshot::{Snapshot, SnapshotStore, TaskStore};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the Studyroom data directory, creating it if needed.
///
/// `STUDYROOM_HOME` overrides the location outright. Otherwise this is
/// `~/.config/studyroom[-dev]/`, with `STUDYROOM_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("STUDYROOM_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::config_dir()
                .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
                .unwrap_or_else(|| PathBuf::from("."));

            let env = std::env::var("STUDYROOM_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studyroom-dev")
            } else {
                base_dir.join("studyroom")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
