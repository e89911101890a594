// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! Config --> cmd::run_* handlers
//!   publish, show-config
//! ```

pub mod config;
pub mod publish;
