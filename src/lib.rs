// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! tstool-session - per-user session files for TSTool.
//!
//! This crate exposes the session layer used by:
//! - the `tstool-session` CLI (`src/main.rs`)
//! - any front end that needs the user's history, UI state and folders
//!
//! Architecture highlights:
//! - `layout`: pure path resolution under `~/.tstool/<major>/`
//! - `folders`: folder creation, refusing the filesystem root
//! - `props`: flat `key = value` property files
//! - `history`, `ui_state`: the two shared state files, each behind a mutex
//! - `config`: the user `TSTool.cfg` and options derived from it
//! - `session`: the owned [`Session`] tying the above together
//! - `cli`, `commands`: command-line front end

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod folders;
pub mod history;
pub mod layout;
pub mod props;
pub mod session;
pub mod ui_state;
pub mod utils;

pub use error::{Result, SessionError};
pub use session::{get_or_create_session, Session};
