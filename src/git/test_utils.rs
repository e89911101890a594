// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted command runner for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::runner::{CommandOutput, CommandRunner};
use crate::error::PublishResult;

/// Answers every command with a canned exit code keyed by git subcommand
/// (`add`, `diff`, `commit`, ...) and records what was asked.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    exit_codes: HashMap<&'static str, i32>,
    stdout: HashMap<&'static str, String>,
    calls: RefCell<Vec<String>>,
    cwds: RefCell<Vec<PathBuf>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_exit(mut self, subcommand: &'static str, code: i32) -> Self {
        self.exit_codes.insert(subcommand, code);
        self
    }

    pub(crate) fn with_stdout(mut self, subcommand: &'static str, stdout: &str) -> Self {
        self.stdout.insert(subcommand, stdout.to_string());
        self
    }

    /// Every command line run so far, without the program name.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn cwds(&self) -> Vec<PathBuf> {
        self.cwds.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, _program: &str, args: &[&str], cwd: &Path) -> PublishResult<CommandOutput> {
        self.calls.borrow_mut().push(args.join(" "));
        self.cwds.borrow_mut().push(cwd.to_path_buf());

        let subcommand = args.first().copied().unwrap_or_default();
        let code = self.exit_codes.get(subcommand).copied().unwrap_or(0);
        let stdout = self.stdout.get(subcommand).cloned().unwrap_or_default();
        let stderr = if code == 0 || (code == 1 && subcommand == "diff") {
            String::new()
        } else {
            format!("fatal: {subcommand} failed")
        };
        Ok(CommandOutput::new(code, stdout, stderr))
    }
}
