// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The publish workflow.
//!
//! ```text
//! repo dir exists? --no--> MissingWorkingDir (unexpected)
//!        |
//!        v
//!   git add .            fail --> VersionControl
//!        |
//!        v
//!   git diff --cached --quiet
//!    0 |        | non-zero
//!      v        v
//!  NothingTo  git commit -m <message>   fail --> VersionControl
//!  Commit       |
//!               v
//!           git push <remote> <branch>  fail --> VersionControl
//!               |
//!               v
//!            Pushed
//! ```
//!
//! Dry run replaces the whole chain with `git status --porcelain -z`.

use std::fmt;
use std::path::PathBuf;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::{ProcessError, PublishResult};
use crate::git::ops::Git;
use crate::git::runner::CommandRunner;

pub const DEFAULT_COMMIT_MESSAGE: &str = "Fix: Ensure tier/score consistency in entry decisions";
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_BRANCH: &str = "v0/jaspalbilkhu-2038-ab520cb6-3";

/// What to commit and where to push it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishSettings {
    pub message: String,
    pub remote: String,
    pub branch: String,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            message: DEFAULT_COMMIT_MESSAGE.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Staging produced an empty change set.
    NothingToCommit,
    /// One commit was created and pushed.
    Pushed { remote: String, branch: String },
    /// Nothing was executed; `pending` paths would have been staged.
    DryRun { pending: usize },
}

impl fmt::Display for PublishOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToCommit => write!(f, "No changes to commit"),
            Self::Pushed { remote, branch } => {
                write!(f, "Successfully pushed to {remote}/{branch}")
            }
            Self::DryRun { pending: 0 } => write!(f, "Dry run: no changes to commit"),
            Self::DryRun { pending } => {
                write!(f, "Dry run: {pending} path(s) would be committed and pushed")
            }
        }
    }
}

/// Stages, commits and pushes everything in one working directory.
///
/// ```no_run
/// use git_publish::git::runner::ShellRunner;
/// use git_publish::publish::{PublishSettings, Publisher};
///
/// let publisher = Publisher::builder()
///     .with_runner(ShellRunner)
///     .with_repo("/path/to/project".into())
///     .with_settings(PublishSettings::default())
///     .build();
/// let outcome = publisher.run()?;
/// println!("{outcome}");
/// # Ok::<(), git_publish::error::PublishError>(())
/// ```
#[derive(Debug, Builder)]
pub struct Publisher<R: CommandRunner> {
    #[builder(setters(name = with_runner))]
    runner: R,
    #[builder(setters(name = with_repo))]
    repo: PathBuf,
    #[builder(setters(name = with_settings), default)]
    settings: PublishSettings,
    #[builder(setters(name = with_dry_run), default = false)]
    dry_run: bool,
}

impl<R: CommandRunner> Publisher<R> {
    #[cfg(test)]
    pub(crate) const fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the workflow once.
    ///
    /// Prints one progress line per step to stdout.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the working directory is missing or git
    /// cannot be started, and a `GitError` if staging, committing or pushing
    /// fails. Nothing after the failing step runs.
    #[instrument(skip(self), fields(repo = %self.repo.display()))]
    pub fn run(&self) -> PublishResult<PublishOutcome> {
        if !self.repo.is_dir() {
            return Err(ProcessError::MissingWorkingDir {
                path: self.repo.display().to_string(),
            }
            .into());
        }

        let git = Git::new(&self.runner, &self.repo);
        if self.dry_run {
            return self.preview(&git);
        }

        println!("Staging all changes...");
        git.add_all()?;

        if !git.has_staged_changes()? {
            info!("index matches HEAD, skipping commit and push");
            return Ok(PublishOutcome::NothingToCommit);
        }

        let PublishSettings {
            message,
            remote,
            branch,
        } = &self.settings;

        println!("Committing changes...");
        git.commit(message)?;
        info!(commit_message = %message, "committed");

        println!("Pushing to {remote}/{branch}...");
        git.push(remote, branch)?;
        info!(remote = %remote, branch = %branch, "pushed");

        Ok(PublishOutcome::Pushed {
            remote: remote.clone(),
            branch: branch.clone(),
        })
    }

    fn preview(&self, git: &Git<'_, R>) -> PublishResult<PublishOutcome> {
        let pending = git.pending_paths()?;
        for path in &pending {
            debug!(path = %path, "would stage");
        }
        if !pending.is_empty() {
            info!(commit_message = %self.settings.message, "would commit");
            info!(
                remote = %self.settings.remote,
                branch = %self.settings.branch,
                "would push"
            );
        }
        Ok(PublishOutcome::DryRun {
            pending: pending.len(),
        })
    }
}

#[cfg(test)]
mod tests;
