// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for prefkit
//!
//! Settings-screen models built on the typed preference keys.

pub mod suggestion;

pub use suggestion::*;
