// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command file history
//!
//! Tracks the command files opened most recently so they can be offered
//! first in the File > Open menu.

pub mod store;

pub use store::{HistoryStore, DEFAULT_MAX_ENTRIES, HISTORY_HEADER};
