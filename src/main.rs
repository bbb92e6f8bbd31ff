// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! prefkit - inspect and edit typed application preferences
//!
//! Entry point for the prefkit CLI application.

use std::io;

use clap::Parser;

use prefkit::cli::{run_command, Cli};
use prefkit::error::Result;
use prefkit::store::FileStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on store diagnostics; `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        let level = if cli.verbose > 1 { "trace" } else { "debug" };
        if let Ok(parsed) = format!("prefkit={}", level).parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let path = cli.store.clone().unwrap_or_else(FileStore::default_path);
    tracing::debug!(path = %path.display(), "Opening preference store");
    let store = FileStore::load(&path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(cli.command, &cli.format, &store, &mut out)
}
