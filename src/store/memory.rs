// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::PreferenceStore;
use crate::preferences::Value;

/// In-memory preference store.
///
/// Used in tests and anywhere persistence is not wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw values.
    pub fn with_values<I, K>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let map = values.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self {
            values: RwLock::new(map),
        }
    }

    /// Snapshot of every stored value.
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.values
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.values.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreferenceStore for MemoryStore {
    fn value(&self, key: &str) -> Option<Value> {
        self.values
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set_value(&self, key: &str, value: Value) {
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value);
    }

    fn remove_value(&self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }

    fn clear(&self) {
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    fn keys(&self) -> Vec<String> {
        self.values
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.value("Anything"), None);
    }

    #[test]
    fn test_set_replace_remove() {
        let store = MemoryStore::new();
        store.set_value("A", Value::Bool(true));
        store.set_value("A", Value::Integer(2));
        assert_eq!(store.value("A"), Some(Value::Integer(2)));
        assert_eq!(store.len(), 1);

        store.remove_value("A");
        assert_eq!(store.value("A"), None);
        store.remove_value("A");
    }

    #[test]
    fn test_clear_and_flush() {
        let store = MemoryStore::with_values([("a", Value::Integer(1)), ("b", Value::Bool(true))]);
        store.clear();
        assert!(store.is_empty());
        assert!(store.flush().is_ok());
    }

    #[test]
    fn test_keys_sorted() {
        let store = MemoryStore::with_values([
            ("b", Value::Bool(true)),
            ("a", Value::Integer(1)),
        ]);
        assert_eq!(store.keys(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_shared_across_threads() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.set_value(&format!("k{}", i), Value::Integer(i)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 4);
    }
}
