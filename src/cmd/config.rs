// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `--show-config` handler.

use crate::config::Config;

/// Print the loaded config files followed by every resolved option.
pub fn run_show_config_command(loaded_files: &[String], config: &Config) {
    if loaded_files.is_empty() {
        println!("(no config files, using defaults)");
    }
    for file in loaded_files {
        println!("{file}");
    }
    for line in config.format_options() {
        println!("{line}");
    }
}
