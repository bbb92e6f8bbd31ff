// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Typed preferences
//!
//! - `value`: the untyped `Value` a store holds
//! - `storable`: typed <-> untyped conversions (scalars, raw-representable, JSON arrays)
//! - `key`: `PreferenceKey` and `DeprecatedPreferenceKey`
//! - `accessor`: `PreferenceStoreExt`, typed get / set / seed over any store
//! - `keys`, `types`: the application's keys and their value types
//! - `defaults`: first-run seeding

mod accessor;
mod defaults;
mod key;
pub mod keys;
mod storable;
pub mod types;
mod value;

pub use accessor::PreferenceStoreExt;
pub use defaults::setup_default_settings;
pub use key::{DeprecatedPreferenceKey, PreferenceKey};
pub use keys::{KeyDescriptor, KeyId};
pub use storable::{Data, PreferenceValue, RawRepresentable, RawValue};
pub use value::{Value, ValueKind};
