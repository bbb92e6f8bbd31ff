// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Typed access to an untyped preference store
//!
//! None of these operations fail. A missing value, a value of the wrong
//! shape, and a raw value that names no variant all read as the key default.

use super::key::{DeprecatedPreferenceKey, PreferenceKey};
use super::storable::PreferenceValue;
use crate::store::PreferenceStore;

/// Typed get / set / seed operations, available on every store.
pub trait PreferenceStoreExt: PreferenceStore {
    /// Read `key`, falling back to its default.
    fn get<T: PreferenceValue>(&self, key: &PreferenceKey<T>) -> T {
        self.value(key.name())
            .and_then(|raw| T::from_value(&raw))
            .unwrap_or_else(|| key.default_value())
    }

    /// Write `value` (or its raw representation) under `key`.
    fn set<T: PreferenceValue>(&self, key: &PreferenceKey<T>, value: &T) {
        self.set_value(key.name(), value.to_value());
    }

    /// Whether any value is stored under `key`, decodable or not.
    fn contains<T>(&self, key: &PreferenceKey<T>) -> bool {
        self.value(key.name()).is_some()
    }

    /// Drop the stored value so the next read yields the default.
    fn reset<T>(&self, key: &PreferenceKey<T>) {
        self.remove_value(key.name());
    }

    /// Seed `key` with its default if nothing is stored yet.
    fn initialize_default<T: PreferenceValue>(&self, key: &PreferenceKey<T>) {
        self.initialize_default_with(key, None);
    }

    /// Seed `key` with `value`, or its default when `None`, if nothing is
    /// stored yet. An existing value is never overwritten, even one that
    /// does not decode.
    fn initialize_default_with<T: PreferenceValue>(&self, key: &PreferenceKey<T>, value: Option<T>) {
        if self.value(key.name()).is_some() {
            return;
        }
        let value = value.unwrap_or_else(|| key.default_value());
        self.set_value(key.name(), value.to_value());
    }

    /// Read the last value written under a deprecated key.
    fn get_deprecated<T: PreferenceValue>(&self, key: &DeprecatedPreferenceKey<T>) -> T {
        self.value(key.name())
            .and_then(|raw| T::from_value(&raw))
            .unwrap_or_else(|| key.default_value())
    }

    /// One-time migration from a deprecated key.
    ///
    /// If `new` holds no value, it is seeded with `convert` applied to the
    /// deprecated key's last value. The deprecated key is never written.
    /// Returns whether a value was written.
    fn migrate_deprecated<O, N, F>(
        &self,
        old: &DeprecatedPreferenceKey<O>,
        new: &PreferenceKey<N>,
        convert: F,
    ) -> bool
    where
        O: PreferenceValue,
        N: PreferenceValue,
        F: FnOnce(O) -> N,
    {
        if self.contains(new) {
            return false;
        }
        let migrated = convert(self.get_deprecated(old));
        self.set(new, &migrated);
        true
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStoreExt for S {}
