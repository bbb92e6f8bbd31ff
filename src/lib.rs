// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! prefkit - typed preference keys over an untyped key-value store.
//!
//! Architecture highlights:
//! - `store`: the `PreferenceStore` port with in-memory and JSON-file backends
//! - `preferences`: typed keys, value conversions, the `PreferenceStoreExt`
//!   accessor, the application key registry and first-run seeding
//! - `config`: the suggestion settings model bound by the settings screen
//! - `cli`: the `prefkit` command-line front end
//!
//! Typed reads never fail: a missing, mistyped or undecodable stored value
//! reads as the key's default.

pub mod cli;
pub mod config;
pub mod error;
pub mod preferences;
pub mod store;

pub use error::{PrefsError, Result};
pub use preferences::{PreferenceKey, PreferenceStoreExt};
pub use store::{FileStore, MemoryStore, PreferenceStore};
