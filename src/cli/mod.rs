// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! git-publish [global options] [publish options]
//! ```
//!
//! No subcommands; with no arguments the tool publishes the current
//! directory with the configured defaults.

pub mod global;
pub mod publish;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::publish::PublishArgs;
use clap::Parser;

/// Stage, commit and push pending changes.
#[derive(Debug, Parser)]
#[command(
    name = "git-publish",
    author,
    version,
    about = "Stage, commit and push pending changes",
    long_about = "git-publish Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Stages every change in the repository, and if anything was\n\
                  staged, commits it with a fixed message and pushes it to a\n\
                  fixed remote branch. Exits 0 when there is nothing to commit.",
    after_help = "CONFIG FILES:\n\n\
                  `publish.toml` in the current directory is loaded when present,\n\
                  followed by every --ini file in order. GIT_PUBLISH_GLOBAL__<KEY> and\n\
                  GIT_PUBLISH_PUBLISH__<KEY> environment variables and command-line\n\
                  flags override both."
)]
pub struct Cli {
    /// Global options.
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Publish options.
    #[command(flatten)]
    pub publish: PublishArgs,
}

impl Cli {
    /// All configuration overrides carried by the command line.
    #[must_use]
    pub fn config_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides = self.global.to_config_overrides();
        overrides.extend(self.publish.to_config_overrides());
        overrides
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
