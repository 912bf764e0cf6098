//! Device-local persisted key-value store.
//!
//! The Rust counterpart of the app's device storage: a single JSON file
//! holding a flat string-to-string map, replaced wholesale on every write.
//! Values are either raw strings (tokens, the language code) or
//! JSON-serialized objects (the selected building, the user record).
//!
//! Reads and writes never fail from the caller's point of view: a missing or
//! broken file starts the store empty, a failed flush keeps the in-memory
//! value and logs a warning. Concurrent writers are last-write-wins; writes
//! are infrequent and human-triggered (login, logout, language switch).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::warn;

/// Storage slot names shared across the crate.
pub mod keys {
    pub const AUTH_TOKEN: &str = "auth_token";
    pub const NOTIFICATION_TOKEN: &str = "notification_token";
    pub const BUILDING_DATA: &str = "building_data";
    pub const USER_ROLES: &str = "user_roles";
    pub const USER_DATA: &str = "user_data";
    pub const REMEMBERED_NIF: &str = "remembered_nif";
    pub const APP_LANGUAGE: &str = "app_language";
}

const STORAGE_FILE: &str = "storage.json";

pub struct Storage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl Storage {
    /// Open the store rooted at `dir`, loading any existing file.
    ///
    /// A missing file starts the store empty; an unreadable or corrupt file
    /// does the same and logs a warning. The caller never sees a read
    /// failure.
    pub async fn open(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(STORAGE_FILE);
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Corrupt storage file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!("Failed to read storage file {}: {}", path.display(), e);
                HashMap::new()
            }
        };

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// The raw value stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    /// Store `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: impl Into<String>) {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.into());
        self.flush(&entries).await;
    }

    /// Remove `key` from the store. Removing an absent key is a no-op.
    pub async fn remove(&self, key: &str) {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_some() {
            self.flush(&entries).await;
        }
    }

    /// Deserialize a JSON-serialized slot. Absent or undecodable values read
    /// as `None`.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Undecodable value in storage slot '{}': {}", key, e);
                None
            }
        }
    }

    /// Serialize `value` to JSON and store it under `key`.
    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, raw).await,
            Err(e) => warn!("Failed to serialize value for storage slot '{}': {}", key, e),
        }
    }

    /// Write the whole map back to disk. Failures keep the in-memory value
    /// and log; they are never surfaced to callers.
    async fn flush(&self, entries: &HashMap<String, String>) {
        let raw = match serde_json::to_string_pretty(entries) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize storage map: {}", e);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                warn!("Failed to create storage directory {}: {}", parent.display(), e);
                return;
            }
        }

        if let Err(e) = tokio::fs::write(&self.path, raw).await {
            warn!("Failed to write storage file {}: {}", self.path.display(), e);
        }
    }
}
