//! Optional `.env` file loading.
//!
//! Keys from the file are merged into the process environment before
//! configuration is read. Variables that are already set are never
//! overwritten. A missing file is the normal case for deployed instances.

use std::io;
use std::path::{Path, PathBuf};

/// Outcome of trying to load an env file.
#[derive(Debug)]
pub enum EnvFile {
    Loaded(PathBuf),
    Missing(PathBuf),
    Invalid(PathBuf, dotenvy::Error),
}

/// Merge the file at `path` into the process environment.
///
/// Runs before tracing is initialized (the file may set `RUST_LOG`), so the
/// outcome is returned and logged later via [`EnvFile::log`].
pub fn load_env_file(path: &Path) -> EnvFile {
    match dotenvy::from_path(path) {
        Ok(()) => EnvFile::Loaded(path.to_path_buf()),
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            EnvFile::Missing(path.to_path_buf())
        }
        Err(e) => EnvFile::Invalid(path.to_path_buf(), e),
    }
}

impl EnvFile {
    pub fn log(&self) {
        match self {
            EnvFile::Loaded(path) => {
                tracing::info!(path = %path.display(), "Loaded environment file");
            }
            EnvFile::Missing(path) => {
                tracing::info!(
                    path = %path.display(),
                    "No .env file found, using system environment variables"
                );
            }
            EnvFile::Invalid(path, e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring unreadable .env file, using system environment variables"
                );
            }
        }
    }
}
