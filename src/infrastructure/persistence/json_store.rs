//! Flat-file JSON storage shared by the JSON repositories.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

use crate::error::AppError;

pub const BOOKS_FILE: &str = "books.json";
pub const LINKS_FILE: &str = "links.json";

/// A directory of JSON documents.
///
/// Every repository operation holds [`JsonStore::lock`] for its whole
/// read-modify-write, so concurrent writers inside one process never lose
/// updates. Writes go to a temporary file that is then renamed over the
/// target.
pub struct JsonStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    /// Opens the store, creating `dir` if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::internal(
                "Failed to create data directory",
                json!({ "path": dir.display().to_string(), "reason": e.to_string() }),
            )
        })?;

        info!("JSON store at {}", dir.display());

        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Reads a document. A missing file yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the file exists but cannot be read
    /// or parsed. Callers that write the value back must not proceed, or the
    /// unreadable records would be overwritten.
    pub async fn read<T>(&self, file: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.dir.join(file);

        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => {
                tracing::error!("Failed to read {}: {}", path.display(), e);
                return Err(AppError::internal(
                    "Failed to read data file",
                    json!({ "path": path.display().to_string() }),
                ));
            }
        };

        serde_json::from_slice(&raw).map_err(|e| {
            tracing::error!("Corrupt data file {}: {}", path.display(), e);
            AppError::internal(
                "Corrupt data file",
                json!({ "path": path.display().to_string(), "reason": e.to_string() }),
            )
        })
    }

    /// Like [`JsonStore::read`], but an unreadable file reads as empty.
    ///
    /// Only for lookups; the file on disk is left untouched.
    pub async fn read_or_default<T>(&self, file: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        self.read(file).await.unwrap_or_else(|_| {
            warn!("Treating {} as empty", file);
            T::default()
        })
    }

    /// Replaces a document atomically.
    pub async fn write<T>(&self, file: &str, value: &T) -> Result<(), AppError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.dir.join(file);
        let tmp = self.dir.join(format!("{file}.tmp"));

        let body = serde_json::to_vec_pretty(value).map_err(|e| {
            AppError::internal("Failed to encode data file", json!({ "reason": e.to_string() }))
        })?;

        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| write_error(&tmp, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| write_error(&path, e))?;

        Ok(())
    }

    /// Checks that the directory is still reachable.
    pub async fn health_check(&self) -> bool {
        tokio::fs::metadata(&self.dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}

fn write_error(path: &Path, e: std::io::Error) -> AppError {
    tracing::error!("Failed to write {}: {}", path.display(), e);
    AppError::internal(
        "Failed to write data file",
        json!({ "path": path.display().to_string() }),
    )
}
