// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for TSTool sessions
//!
//! Handles the user `TSTool.cfg` file and the options derived from it.

pub mod settings;

pub use settings::*;
