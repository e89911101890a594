// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!          +----------+----------+
//!          v                     v
//!       cli (clap)          cmd (handlers)
//!          |                     |
//!          +----------+----------+
//!                     v
//!         ,-----------------------,
//!         |        config         |
//!         | TOML, env, overrides  |
//!         '-----------+-----------'
//!                     v
//!                  publish
//!            stage/check/commit/push
//!                     |
//!                     v
//!                    git
//!          ops (Git<R>) over CommandRunner
//!                     |
//!                     v
//!              ShellRunner --> git CLI
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod publish;
