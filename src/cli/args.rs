// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for prefkit.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// prefkit - inspect and edit typed application preferences
#[derive(Parser, Debug)]
#[command(name = "prefkit")]
#[command(version, about = "Inspect and edit typed application preferences")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Preference store file (defaults to $PREFKIT_HOME/preferences.json)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every registered key with its kind and default
    Keys,

    /// Show the effective value of every key (default when no command given)
    Show,

    /// Get the effective value of a key
    Get {
        /// Preference key name (e.g. "RealtimeSuggestionDebounce")
        key: String,
    },

    /// Set a key from its textual form
    Set {
        /// Preference key name
        key: String,

        /// Value to set, parsed according to the key's kind
        value: String,
    },

    /// Remove a stored value so the default applies again
    Reset {
        /// Key to reset; resets every key when omitted
        key: Option<String>,
    },

    /// Seed defaults for keys that have no stored value
    Init,
}

/// Output format for command results
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
