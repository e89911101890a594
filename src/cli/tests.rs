// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use clap::Parser;

fn override_keys(cli: &Cli) -> Vec<&'static str> {
    cli.config_overrides().into_iter().map(|(key, _)| key).collect()
}

#[test]
fn test_parse_no_args() {
    let cli = Cli::try_parse_from(["git-publish"]).unwrap();
    assert!(!cli.global.dry);
    assert!(cli.global.inis.is_empty());
    assert!(cli.publish.repo.is_none());
    assert!(cli.config_overrides().is_empty());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from(["git-publish", "-l", "4", "--dry", "--log-file", "out.log"])
        .unwrap();
    insta::assert_debug_snapshot!(override_keys(&cli), @r#"
    [
        "global.output_log_level",
        "global.file_log_level",
        "global.log_file",
        "global.dry",
    ]
    "#);
}

#[test]
fn test_parse_publish_options() {
    let cli = Cli::try_parse_from([
        "git-publish",
        "-C",
        "/srv/project",
        "-m",
        "chore: sync",
        "--remote",
        "upstream",
        "--branch",
        "main",
    ])
    .unwrap();

    assert_eq!(cli.publish.message.as_deref(), Some("chore: sync"));
    insta::assert_debug_snapshot!(override_keys(&cli), @r#"
    [
        "publish.repo",
        "publish.message",
        "publish.remote",
        "publish.branch",
    ]
    "#);
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["git-publish", "-l", "7"]).is_err());
}

#[test]
fn test_repeated_ini() {
    let cli = Cli::try_parse_from(["git-publish", "-i", "a.toml", "--ini", "b.toml"]).unwrap();
    assert_eq!(cli.global.inis.len(), 2);
}
