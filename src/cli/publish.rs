// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options overriding the `[publish]` config section.

use clap::Args;
use std::path::PathBuf;

/// Where to publish from, what to say, and where to push.
#[derive(Debug, Clone, Default, Args)]
pub struct PublishArgs {
    /// Repository working directory (defaults to the current directory).
    #[arg(short = 'C', long = "repo", value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Commit message.
    #[arg(short = 'm', long = "message", value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Remote to push to.
    #[arg(long = "remote", value_name = "REMOTE")]
    pub remote: Option<String>,

    /// Branch to push.
    #[arg(long = "branch", value_name = "BRANCH")]
    pub branch: Option<String>,
}

impl PublishArgs {
    /// Converts command-line options to `publish.*` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides = Vec::new();

        if let Some(ref repo) = self.repo {
            overrides.push(("publish.repo", repo.display().to_string().into()));
        }
        if let Some(ref message) = self.message {
            overrides.push(("publish.message", message.clone().into()));
        }
        if let Some(ref remote) = self.remote {
            overrides.push(("publish.remote", remote.clone().into()));
        }
        if let Some(ref branch) = self.branch {
            overrides.push(("publish.branch", branch.clone().into()));
        }

        overrides
    }
}
