// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Untyped preference store port and its backends
//!
//! The typed accessor layer only ever talks to [`PreferenceStore`]. Backends
//! own their synchronization, so every method takes `&self`.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::preferences::Value;

/// A flat, string-keyed mapping of untyped values.
pub trait PreferenceStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn value(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`, replacing any existing value.
    fn set_value(&self, key: &str, value: Value);

    /// Remove any value stored under `key`.
    fn remove_value(&self, key: &str);

    /// All keys currently holding a value, sorted.
    fn keys(&self) -> Vec<String>;

    /// Remove every stored value.
    fn clear(&self) {
        for key in self.keys() {
            self.remove_value(&key);
        }
    }

    /// Write pending changes to durable storage, reporting failures that the
    /// mutating methods only log. Stores without backing storage succeed.
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn value(&self, key: &str) -> Option<Value> {
        (**self).value(key)
    }

    fn set_value(&self, key: &str, value: Value) {
        (**self).set_value(key, value)
    }

    fn remove_value(&self, key: &str) {
        (**self).remove_value(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }

    fn clear(&self) {
        (**self).clear()
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::sync::Arc<S> {
    fn value(&self, key: &str) -> Option<Value> {
        (**self).value(key)
    }

    fn set_value(&self, key: &str, value: Value) {
        (**self).set_value(key, value)
    }

    fn remove_value(&self, key: &str) {
        (**self).remove_value(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }

    fn clear(&self) {
        (**self).clear()
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}
