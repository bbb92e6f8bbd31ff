// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! JSON-file-backed preference store
//!
//! The whole map is kept in memory and written back as a pretty-printed JSON
//! object after every mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::PreferenceStore;
use crate::error::{PrefsError, Result};
use crate::preferences::Value;

/// File name of the store inside the prefkit home directory.
pub const STORE_FILE_NAME: &str = "preferences.json";

/// Preference store persisted to a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, Value>>,
}

impl FileStore {
    /// Get the prefkit home directory (~/.prefkit or $PREFKIT_HOME).
    pub fn prefkit_home() -> PathBuf {
        if let Ok(home) = std::env::var("PREFKIT_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".prefkit")
    }

    /// Get the default store file path.
    pub fn default_path() -> PathBuf {
        Self::prefkit_home().join(STORE_FILE_NAME)
    }

    /// Open the store at `path`, treating a missing, unreadable or corrupt
    /// file as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read_values(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring unreadable preference store"
                );
                BTreeMap::new()
            }
        };
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    /// Open the store at `path`, failing on unreadable or corrupt content.
    ///
    /// A missing file is still an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.is_dir() {
            return Err(PrefsError::Config(format!(
                "store path is a directory: {}",
                path.display()
            )));
        }
        let values = Self::read_values(&path)?;
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = {
            let values = self.values.read().unwrap_or_else(|e| e.into_inner());
            serde_json::to_string_pretty(&*values)?
        };
        std::fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), "Preference store written");
        Ok(())
    }

    /// Read the file as a JSON object. Entries that are not a storable value
    /// (`null`, nested objects, out-of-range bytes) are dropped one by one so
    /// the rest of the store still loads.
    fn read_values(path: &Path) -> Result<BTreeMap<String, Value>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(&content)?;
        let mut values = BTreeMap::new();
        for (key, json) in raw {
            match serde_json::from_value::<Value>(json) {
                Ok(value) => {
                    values.insert(key, value);
                }
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    key = %key,
                    error = %e,
                    "Dropping unreadable preference value"
                ),
            }
        }
        Ok(values)
    }

    fn persist(&self) {
        if let Err(e) = self.write_file() {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to persist preference store"
            );
        }
    }
}

impl PreferenceStore for FileStore {
    fn value(&self, key: &str) -> Option<Value> {
        self.values
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set_value(&self, key: &str, value: Value) {
        if !value.is_json_representable() {
            tracing::warn!(key = %key, value = %value, "Refusing to store non-finite number");
            return;
        }
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value);
        self.persist();
    }

    fn remove_value(&self, key: &str) {
        let removed = self
            .values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key)
            .is_some();
        if removed {
            self.persist();
        }
    }

    fn keys(&self) -> Vec<String> {
        self.values
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }

    fn clear(&self) {
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        self.persist();
    }

    fn flush(&self) -> Result<()> {
        self.write_file()
    }
}
