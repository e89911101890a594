// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> publish | show-config
//!                                             |
//!                           Ok --> 0    Err --> stderr, 1
//! ```

use std::process::ExitCode;

use anyhow::Context;

use git_publish::cli::{self, Cli};
use git_publish::cmd::config::run_show_config_command;
use git_publish::cmd::publish::run_publish_command;
use git_publish::config::Config;
use git_publish::config::loader::{ConfigLoader, ENV_PREFIX};
use git_publish::error::{Result, kind_of};
use git_publish::git::runner::ShellRunner;
use git_publish::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}: {e:#}", kind_of(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let loader = build_config_loader(cli)?;
    let loaded_files = loader.format_loaded_files();
    let config = loader.build().context("failed to load config")?;

    let _log_guard =
        init_logging(&build_log_config(&config)).context("failed to initialize logging")?;

    if cli.global.show_config {
        run_show_config_command(&loaded_files, &config);
    } else {
        run_publish_command(ShellRunner, &config)?;
    }
    Ok(())
}

fn build_config_loader(cli: &Cli) -> Result<ConfigLoader> {
    let mut loader = Config::builder();
    if !cli.global.no_default_ini {
        loader = loader.add_toml_file_optional("publish.toml");
    }
    for ini_path in &cli.global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in cli.config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}
