// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish command implementation.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::git::runner::CommandRunner;
use crate::publish::{PublishOutcome, Publisher};

/// Working directory: `publish.repo` when configured, else the current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn resolve_repo_dir(config: &Config) -> Result<PathBuf> {
    match &config.publish.repo {
        Some(repo) => Ok(repo.clone()),
        None => std::env::current_dir().context("failed to determine current directory"),
    }
}

/// Main handler for the publish workflow.
///
/// # Errors
///
/// Returns an error if the working directory cannot be resolved or any
/// step of the workflow fails.
pub fn run_publish_command<R: CommandRunner>(
    runner: R,
    config: &Config,
) -> Result<PublishOutcome> {
    let repo = resolve_repo_dir(config)?;
    info!(repo = %repo.display(), dry = config.global.dry, "publishing");

    let publisher = Publisher::builder()
        .with_runner(runner)
        .with_repo(repo)
        .with_settings(config.publish.settings())
        .with_dry_run(config.global.dry)
        .build();

    let outcome = publisher.run()?;
    println!("{outcome}");
    Ok(outcome)
}
