// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Typed preference keys

use std::fmt;

/// A named, typed setting with a statically known default.
///
/// Keys are plain `const` items; the default is produced by a function so
/// that non-`const` defaults (strings, vectors, structs) work the same way
/// as scalars.
pub struct PreferenceKey<T> {
    name: &'static str,
    default: fn() -> T,
}

impl<T> PreferenceKey<T> {
    pub const fn new(name: &'static str, default: fn() -> T) -> Self {
        Self { name, default }
    }

    /// The string key in the underlying store.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> T {
        (self.default)()
    }
}

/// A key kept only so its last value can be read once during migration.
///
/// The accessor layer only reads these, through `get_deprecated`.
pub struct DeprecatedPreferenceKey<T> {
    name: &'static str,
    default: fn() -> T,
}

impl<T> DeprecatedPreferenceKey<T> {
    pub const fn new(name: &'static str, default: fn() -> T) -> Self {
        Self { name, default }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> T {
        (self.default)()
    }
}

// Manual impls: derives would wrongly require `T: Clone`/`T: Debug`.

impl<T> Clone for PreferenceKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PreferenceKey<T> {}

impl<T> fmt::Debug for PreferenceKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceKey").field("name", &self.name).finish()
    }
}

impl<T> Clone for DeprecatedPreferenceKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DeprecatedPreferenceKey<T> {}

impl<T> fmt::Debug for DeprecatedPreferenceKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeprecatedPreferenceKey")
            .field("name", &self.name)
            .finish()
    }
}
