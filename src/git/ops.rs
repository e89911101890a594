// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations used by the publisher.
//!
//! ```text
//! add_all             git add .
//! has_staged_changes  git diff --cached --quiet   0=clean else=dirty
//! commit              git commit -m <message>
//! push                git push <remote> <branch>
//! pending_paths       git status --porcelain -z   (dry run)
//! ```

use std::path::Path;

use tracing::debug;

use super::runner::{CommandOutput, CommandRunner};
use crate::error::{GitError, PublishResult};

const GIT: &str = "git";

/// Git commands bound to one working directory.
pub struct Git<'a, R: CommandRunner> {
    runner: &'a R,
    repo: &'a Path,
}

impl<'a, R: CommandRunner> Git<'a, R> {
    #[must_use]
    pub const fn new(runner: &'a R, repo: &'a Path) -> Self {
        Self { runner, repo }
    }

    fn exec(&self, args: &[&str]) -> PublishResult<CommandOutput> {
        debug!(cwd = %self.repo.display(), cmd = %command_line(args), "exec");
        self.runner.run(GIT, args, self.repo)
    }

    fn exec_checked(&self, args: &[&str]) -> PublishResult<CommandOutput> {
        let output = self.exec(args)?;
        if output.success() {
            Ok(output)
        } else {
            Err(command_failed(args, &output).into())
        }
    }

    /// Stage every change in the working tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git add` exits non-zero.
    pub fn add_all(&self) -> PublishResult<()> {
        self.exec_checked(&["add", "."])?;
        Ok(())
    }

    /// Check whether the index differs from `HEAD`.
    ///
    /// Only exit code 0 means clean. Every non-zero code counts as changes
    /// present; a repository too broken to diff fails at the commit instead.
    ///
    /// # Errors
    ///
    /// Returns an error only if git cannot be started.
    pub fn has_staged_changes(&self) -> PublishResult<bool> {
        let output = self.exec(&["diff", "--cached", "--quiet"])?;
        if !output.success() {
            debug!(code = output.exit_code(), "staged changes present");
        }
        Ok(!output.success())
    }

    /// Create a commit from the index.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git commit` exits non-zero.
    pub fn commit(&self, message: &str) -> PublishResult<()> {
        self.exec_checked(&["commit", "-m", message])?;
        Ok(())
    }

    /// Push the local branch of the same name to `remote`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git push` exits non-zero.
    pub fn push(&self, remote: &str, branch: &str) -> PublishResult<()> {
        self.exec_checked(&["push", remote, branch])?;
        Ok(())
    }

    /// Paths `git add .` would pick up, as reported by
    /// `git status --porcelain -z`. Renames and copies yield the new path.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git status` exits non-zero.
    pub fn pending_paths(&self) -> PublishResult<Vec<String>> {
        let output = self.exec_checked(&["status", "--porcelain", "-z"])?;
        Ok(parse_porcelain_z(output.stdout()))
    }
}

/// Entries are `XY <path>` separated by NUL. A rename or copy entry is
/// followed by one extra NUL-terminated field holding the source path.
fn parse_porcelain_z(stdout: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut fields = stdout.split('\0');
    while let Some(entry) = fields.next() {
        let (Some(status), Some(path)) = (entry.get(..2), entry.get(3..)) else {
            continue;
        };
        if status.contains(['R', 'C']) {
            fields.next();
        }
        if !path.is_empty() {
            paths.push(path.to_string());
        }
    }
    paths
}

fn command_line(args: &[&str]) -> String {
    let mut cmd = GIT.to_string();
    for arg in args {
        use std::fmt::Write as _;
        if arg.contains(' ') {
            let _ = write!(cmd, " \"{arg}\"");
        } else {
            let _ = write!(cmd, " {arg}");
        }
    }
    cmd
}

fn command_failed(args: &[&str], output: &CommandOutput) -> GitError {
    let stderr = output.stderr().trim();
    let message = if stderr.is_empty() {
        output.stdout().trim()
    } else {
        stderr
    };
    GitError::CommandFailed {
        command: command_line(args),
        code: output.exit_code(),
        message: message.to_string(),
    }
}
