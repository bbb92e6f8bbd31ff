// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command implementations
//!
//! Commands work on the untyped registry view so every key can be listed,
//! printed and edited by name. Output goes to a caller-supplied writer.

use std::io::Write;

use serde_json::json;

use super::args::{Commands, OutputFormat};
use crate::error::{PrefsError, Result};
use crate::preferences::{setup_default_settings, KeyDescriptor, KeyId, Value};
use crate::store::PreferenceStore;

/// Run a parsed command against a store. `None` behaves like `show`.
///
/// Mutating commands end with [`PreferenceStore::flush`], so a write that
/// never reached storage fails the command.
pub fn run_command<S, W>(
    command: Option<Commands>,
    format: &OutputFormat,
    store: &S,
    out: &mut W,
) -> Result<()>
where
    S: PreferenceStore + ?Sized,
    W: Write,
{
    match command {
        Some(Commands::Keys) => run_keys(format, out),
        Some(Commands::Show) | None => run_show(format, store, out),
        Some(Commands::Get { key }) => run_get(&key, format, store, out),
        Some(Commands::Set { key, value }) => {
            run_set(&key, &value, store)?;
            store.flush()
        }
        Some(Commands::Reset { key }) => {
            run_reset(key.as_deref(), store)?;
            store.flush()
        }
        Some(Commands::Init) => {
            setup_default_settings(store);
            tracing::info!("Seeded default preferences");
            store.flush()
        }
    }
}

fn lookup(name: &str) -> Result<KeyDescriptor> {
    KeyId::from_name(name)
        .map(|id| id.descriptor())
        .ok_or_else(|| PrefsError::UnknownKey(name.to_string()))
}

fn value_to_json(value: &Value) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

fn run_keys<W: Write>(format: &OutputFormat, out: &mut W) -> Result<()> {
    let descriptors: Vec<_> = KeyId::ALL.iter().map(|id| id.descriptor()).collect();
    match format {
        OutputFormat::Json => {
            let list: Vec<_> = descriptors
                .iter()
                .map(|d| {
                    json!({
                        "name": d.name,
                        "kind": d.kind.to_string(),
                        "default": value_to_json(&d.default),
                        "deprecated": d.deprecated,
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&list)?)?;
        }
        OutputFormat::Text => {
            for d in descriptors {
                let marker = if d.deprecated { " (deprecated)" } else { "" };
                writeln!(out, "{} [{}] = {}{}", d.name, d.kind, d.default, marker)?;
            }
        }
    }
    Ok(())
}

fn run_show<S, W>(format: &OutputFormat, store: &S, out: &mut W) -> Result<()>
where
    S: PreferenceStore + ?Sized,
    W: Write,
{
    let current: Vec<_> = KeyId::ALL
        .iter()
        .map(|id| id.descriptor())
        .filter(|d| !d.deprecated)
        .map(|d| {
            let stored = store.value(d.name);
            let is_set = stored.is_some();
            (d.name, d.effective(stored.as_ref()), is_set)
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let map: serde_json::Map<_, _> = current
                .iter()
                .map(|(name, value, _)| (name.to_string(), value_to_json(value)))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&map)?)?;
        }
        OutputFormat::Text => {
            for (name, value, is_set) in current {
                let marker = if is_set { "" } else { " (default)" };
                writeln!(out, "{} = {}{}", name, value, marker)?;
            }
        }
    }
    Ok(())
}

fn run_get<S, W>(key: &str, format: &OutputFormat, store: &S, out: &mut W) -> Result<()>
where
    S: PreferenceStore + ?Sized,
    W: Write,
{
    let descriptor = lookup(key)?;
    let value = descriptor.effective(store.value(descriptor.name).as_ref());
    match format {
        OutputFormat::Json => writeln!(out, "{}", value_to_json(&value))?,
        OutputFormat::Text => writeln!(out, "{}", value)?,
    }
    Ok(())
}

fn run_set<S>(key: &str, text: &str, store: &S) -> Result<()>
where
    S: PreferenceStore + ?Sized,
{
    let descriptor = lookup(key)?;
    if descriptor.deprecated {
        return Err(PrefsError::DeprecatedKey(descriptor.name.to_string()));
    }

    let value = descriptor
        .kind
        .parse(text)
        .map_err(|reason| PrefsError::InvalidValue {
            key: descriptor.name.to_string(),
            reason,
        })?;
    if !descriptor.accepts(&value) {
        return Err(PrefsError::InvalidValue {
            key: descriptor.name.to_string(),
            reason: format!("'{}' is not a valid {} value", text, descriptor.name),
        });
    }

    tracing::debug!(key = descriptor.name, value = %value, "Setting preference");
    store.set_value(descriptor.name, value);
    Ok(())
}

fn run_reset<S>(key: Option<&str>, store: &S) -> Result<()>
where
    S: PreferenceStore + ?Sized,
{
    match key {
        Some(name) => {
            let descriptor = lookup(name)?;
            store.remove_value(descriptor.name);
        }
        None => store.clear(),
    }
    Ok(())
}
