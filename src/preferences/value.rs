// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Untyped stored values
//!
//! A preference store only knows about `Value`. Typed access decodes from it
//! and falls back to the key default whenever the variant does not fit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw value as held by a preference store.
///
/// Serialized untagged, so a JSON-backed store reads like a plain settings
/// file. Variant order matters for deserialization: `1` is an `Integer`,
/// `1.0` is a `Double`, and a JSON array of bytes is `Data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Data(Vec<u8>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Integer(_) => ValueKind::Integer,
            Value::Double(_) => ValueKind::Double,
            Value::String(_) => ValueKind::String,
            Value::Data(_) => ValueKind::Data,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Doubles accept stored integers, the way a native number store
    /// hands back an integral number for a floating-point read.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Data(d) => Some(d),
            _ => None,
        }
    }

    /// Whether the value survives a JSON round trip. Non-finite doubles
    /// serialize as `null`.
    pub fn is_json_representable(&self) -> bool {
        !matches!(self, Value::Double(d) if !d.is_finite())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Double(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "{}", s),
            Value::Data(d) => {
                for byte in d {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

/// The shape of value a key stores, used by the untyped registry view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Integer,
    Double,
    String,
    Data,
}

impl ValueKind {
    /// Parse user-provided text into a value of this kind.
    ///
    /// Returns a human-readable reason on failure.
    pub fn parse(&self, text: &str) -> std::result::Result<Value, String> {
        match self {
            ValueKind::Bool => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" | "on" => Ok(Value::Bool(true)),
                "false" | "no" | "0" | "off" => Ok(Value::Bool(false)),
                other => Err(format!("expected a boolean, got '{}'", other)),
            },
            ValueKind::Integer => text
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| format!("expected an integer, got '{}'", text)),
            ValueKind::Double => match text.trim().parse::<f64>() {
                Ok(d) if d.is_finite() => Ok(Value::Double(d)),
                Ok(_) => Err(format!("expected a finite number, got '{}'", text)),
                Err(_) => Err(format!("expected a number, got '{}'", text)),
            },
            ValueKind::String => Ok(Value::String(text.to_string())),
            ValueKind::Data => parse_hex(text.trim())
                .map(Value::Data)
                .ok_or_else(|| format!("expected hex bytes, got '{}'", text)),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::Data => "data",
        };
        f.write_str(name)
    }
}

fn parse_hex(text: &str) -> Option<Vec<u8>> {
    if text.len() % 2 != 0 || !text.is_ascii() {
        return None;
    }
    (0..text.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&text[i..i + 2], 16).ok())
        .collect()
}
