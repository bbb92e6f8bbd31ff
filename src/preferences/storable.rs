// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Conversions between typed preference values and stored `Value`s
//!
//! Three families are supported:
//! - plain scalars (`bool`, integers, `f64`, `String`, [`Data`])
//! - raw-representable types, stored as their string or integer raw value
//! - sequences of serde types, stored as a JSON array string
//!
//! Decoding is always fallible and never panics; the accessor layer turns
//! `None` into the key default.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::value::{Value, ValueKind};

/// A type that can be stored under a preference key.
pub trait PreferenceValue: Sized {
    /// The stored shape, used by the registry to describe a key.
    const KIND: ValueKind;

    fn to_value(&self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

impl PreferenceValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl PreferenceValue for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl PreferenceValue for i32 {
    const KIND: ValueKind = ValueKind::Integer;

    fn to_value(&self) -> Value {
        Value::Integer(i64::from(*self))
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|i| i32::try_from(i).ok())
    }
}

impl PreferenceValue for f64 {
    const KIND: ValueKind = ValueKind::Double;

    fn to_value(&self) -> Value {
        Value::Double(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl PreferenceValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

/// Opaque binary blob preference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Data(pub Vec<u8>);

impl PreferenceValue for Data {
    const KIND: ValueKind = ValueKind::Data;

    fn to_value(&self) -> Value {
        Value::Data(self.0.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bytes().map(|b| Data(b.to_vec()))
    }
}

/// A primitive that a raw-representable type maps onto.
pub trait RawValue: Sized {
    const KIND: ValueKind;

    fn into_value(self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

impl RawValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl RawValue for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn into_value(self) -> Value {
        Value::Integer(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

/// A type convertible to and from a primitive raw value, typically an
/// enum-like choice.
///
/// `from_raw_value` returns `None` for raw values that name no variant;
/// reads then fall back to the key default.
pub trait RawRepresentable: Sized {
    type Raw: RawValue;

    fn raw_value(&self) -> Self::Raw;

    fn from_raw_value(raw: Self::Raw) -> Option<Self>;
}

impl<T: RawRepresentable> PreferenceValue for T {
    const KIND: ValueKind = <T::Raw as RawValue>::KIND;

    fn to_value(&self) -> Value {
        self.raw_value().into_value()
    }

    fn from_value(value: &Value) -> Option<Self> {
        <T::Raw as RawValue>::from_value(value).and_then(T::from_raw_value)
    }
}

/// Sequences are stored as a JSON array string.
///
/// Encoding failure stores `"[]"`; a raw string that is not a JSON array of
/// `T` does not decode.
impl<T: Serialize + DeserializeOwned> RawRepresentable for Vec<T> {
    type Raw = String;

    fn raw_value(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    fn from_raw_value(raw: String) -> Option<Self> {
        serde_json::from_str(&raw).ok()
    }
}

/// Implements [`RawRepresentable`] with a JSON string raw value for a
/// serde type.
///
/// Encoding failure stores an empty string. Unlike the `"[]"` written for
/// sequences, there is no type-independent empty form for a struct or enum,
/// and an empty string never decodes, so reads fall back to the key default.
#[macro_export]
macro_rules! json_raw_representable {
    ($ty:ty) => {
        impl $crate::preferences::RawRepresentable for $ty {
            type Raw = String;

            fn raw_value(&self) -> String {
                ::serde_json::to_string(self).unwrap_or_default()
            }

            fn from_raw_value(raw: String) -> Option<Self> {
                ::serde_json::from_str(&raw).ok()
            }
        }
    };
}
