// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command execution seam.
//!
//! ```text
//! CommandRunner::run(program, args, cwd)
//!        |
//!        v
//!   ShellRunner
//!   which(program) --> ExecutableNotFound
//!   cwd.is_dir()   --> MissingWorkingDir
//!   Command::output()
//!        |
//!        v
//!   CommandOutput { exit_code, stdout, stderr }
//! ```
//!
//! A non-zero exit is NOT an error at this layer; callers decide what an
//! exit code means.

use std::path::Path;
use std::process::Command;

use tracing::trace;

use crate::error::{ProcessError, PublishResult};

/// Captured result of one finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl CommandOutput {
    /// Create an output record.
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Exit code (-1 when the process was killed by a signal).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs an external program to completion.
///
/// Implementors return `Err` only when the program could not be run at all.
pub trait CommandRunner {
    /// Run `program` with `args` inside `cwd` and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the program cannot be found or spawned,
    /// or if `cwd` is not a directory.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> PublishResult<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> PublishResult<CommandOutput> {
        (**self).run(program, args, cwd)
    }
}

/// Runner backed by real child processes.
///
/// Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so a push that
/// needs credentials fails instead of waiting on a prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> PublishResult<CommandOutput> {
        let executable = which::which(program).map_err(|_| ProcessError::ExecutableNotFound {
            name: program.to_string(),
        })?;

        if !cwd.is_dir() {
            return Err(ProcessError::MissingWorkingDir {
                path: cwd.display().to_string(),
            }
            .into());
        }

        let output = Command::new(&executable)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: format!("{program} {}", args.join(" ")),
                source,
            })?;

        let result = CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        trace!(
            program,
            exit_code = result.exit_code,
            stdout = %result.stdout.trim(),
            stderr = %result.stderr.trim(),
            "completed"
        );
        Ok(result)
    }
}
