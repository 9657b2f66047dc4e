//! Optional `.env` file loading.
//!
//! The env file is a convenience, not required configuration: a missing or
//! malformed file never stops startup. Variables already present in the
//! process environment take precedence over the file.

use std::path::{Path, PathBuf};

use super::defaults::ENV_FILE_NAME;

/// Outcome of the env file step. Loading happens before logging is set up,
/// so the caller reports it with [`EnvFileStatus::log`] afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// File found and applied.
    Loaded(PathBuf),
    /// No file at the expected location.
    Missing(PathBuf),
    /// File present but could not be applied.
    Invalid { path: PathBuf, reason: String },
}

/// Load `.env` from the current working directory, if present.
pub fn load_env_file() -> EnvFileStatus {
    load_env_file_from(Path::new(ENV_FILE_NAME))
}

/// Load an env file from an explicit path.
pub fn load_env_file_from(path: &Path) -> EnvFileStatus {
    match dotenvy::from_path(path) {
        Ok(()) => EnvFileStatus::Loaded(path.to_path_buf()),
        Err(err) if err.not_found() => EnvFileStatus::Missing(path.to_path_buf()),
        Err(err) => EnvFileStatus::Invalid {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    }
}

impl EnvFileStatus {
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => {
                tracing::debug!(path = %path.display(), "loaded env file");
            }
            Self::Missing(path) => {
                tracing::debug!(path = %path.display(), "no env file found, using process environment");
            }
            Self::Invalid { path, reason } => {
                tracing::warn!(path = %path.display(), %reason, "ignoring unreadable env file");
            }
        }
    }
}
