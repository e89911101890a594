// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::cell::{Cell, RefCell};
use std::path::Path;

use super::{
    DEFAULT_BRANCH, DEFAULT_COMMIT_MESSAGE, PublishOutcome, PublishSettings, Publisher,
};
use crate::error::{ErrorKind, PublishResult};
use crate::git::runner::{CommandOutput, CommandRunner};
use crate::git::test_utils::ScriptedRunner;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn publisher<R: CommandRunner>(runner: R, repo: &Path) -> Publisher<R> {
    Publisher::builder()
        .with_runner(runner)
        .with_repo(repo.to_path_buf())
        .build()
}

/// In-memory repository: edits make the tree dirty, `add` stages them,
/// `commit` clears the index, `push` counts.
#[derive(Default)]
struct FakeRepo {
    dirty: Cell<bool>,
    staged: Cell<bool>,
    commits: RefCell<Vec<String>>,
    pushes: RefCell<Vec<String>>,
}

impl FakeRepo {
    fn edit(&self) {
        self.dirty.set(true);
    }
}

impl CommandRunner for FakeRepo {
    fn run(&self, _program: &str, args: &[&str], _cwd: &Path) -> PublishResult<CommandOutput> {
        let code = match args {
            ["add", "."] => {
                if self.dirty.replace(false) {
                    self.staged.set(true);
                }
                0
            }
            ["diff", "--cached", "--quiet"] => i32::from(self.staged.get()),
            ["commit", "-m", message] if self.staged.get() => {
                self.staged.set(false);
                self.commits.borrow_mut().push((*message).to_string());
                0
            }
            ["push", remote, branch] => {
                self.pushes.borrow_mut().push(format!("{remote} {branch}"));
                0
            }
            _ => 1,
        };
        Ok(CommandOutput::new(code, "", ""))
    }
}

#[test]
fn test_clean_tree_is_noop() {
    let temp = temp_dir();
    let runner = ScriptedRunner::new().with_exit("diff", 0);
    let publisher = publisher(runner, temp.path());

    let outcome = publisher.run().unwrap();

    assert_eq!(outcome, PublishOutcome::NothingToCommit);
    insta::assert_debug_snapshot!(publisher.runner().calls(), @r#"
    [
        "add .",
        "diff --cached --quiet",
    ]
    "#);
}

#[test]
fn test_changes_are_committed_and_pushed() {
    let temp = temp_dir();
    let runner = ScriptedRunner::new().with_exit("diff", 1);
    let publisher = publisher(runner, temp.path());

    let outcome = publisher.run().unwrap();

    assert_eq!(
        outcome,
        PublishOutcome::Pushed {
            remote: "origin".to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    );
    insta::assert_debug_snapshot!(publisher.runner().calls(), @r#"
    [
        "add .",
        "diff --cached --quiet",
        "commit -m Fix: Ensure tier/score consistency in entry decisions",
        "push origin v0/jaspalbilkhu-2038-ab520cb6-3",
    ]
    "#);
    assert!(
        publisher
            .runner()
            .cwds()
            .iter()
            .all(|cwd| cwd == temp.path())
    );
}

#[test]
fn test_stage_failure_stops_everything() {
    let temp = temp_dir();
    let runner = ScriptedRunner::new().with_exit("add", 128).with_exit("diff", 1);
    let publisher = publisher(runner, temp.path());

    let err = publisher.run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::VersionControl);
    assert_eq!(publisher.runner().calls(), ["add ."]);
}

#[test]
fn test_commit_failure_skips_push() {
    let temp = temp_dir();
    let runner = ScriptedRunner::new()
        .with_exit("diff", 1)
        .with_exit("commit", 1);
    let publisher = publisher(runner, temp.path());

    let err = publisher.run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::VersionControl);
    assert!(
        !publisher
            .runner()
            .calls()
            .iter()
            .any(|call| call.starts_with("push"))
    );
}

#[test]
fn test_push_failure_is_version_control_error() {
    let temp = temp_dir();
    let runner = ScriptedRunner::new().with_exit("diff", 1).with_exit("push", 1);
    let err = publisher(runner, temp.path()).run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::VersionControl);
}

#[test]
fn test_any_nonzero_diff_counts_as_changes() {
    let temp = temp_dir();
    let runner = ScriptedRunner::new().with_exit("diff", 2);
    let publisher = publisher(runner, temp.path());

    let outcome = publisher.run().unwrap();

    assert!(matches!(outcome, PublishOutcome::Pushed { .. }));
    insta::assert_debug_snapshot!(publisher.runner().calls(), @r#"
    [
        "add .",
        "diff --cached --quiet",
        "commit -m Fix: Ensure tier/score consistency in entry decisions",
        "push origin v0/jaspalbilkhu-2038-ab520cb6-3",
    ]
    "#);
}

#[test]
fn test_broken_diff_fails_at_commit() {
    let temp = temp_dir();
    let runner = ScriptedRunner::new()
        .with_exit("diff", 128)
        .with_exit("commit", 128);
    let publisher = publisher(runner, temp.path());

    let err = publisher.run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::VersionControl);
    assert!(err.to_string().contains("git commit -m"), "got: {err}");
    assert_eq!(publisher.runner().calls().len(), 3);
}

#[test]
fn test_missing_repo_dir_is_unexpected() {
    let temp = temp_dir();
    let missing = temp.path().join("gone");
    let publisher = publisher(ScriptedRunner::new(), &missing);

    let err = publisher.run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(publisher.runner().calls().is_empty());
}

#[test]
fn test_second_run_is_noop() {
    let temp = temp_dir();
    let repo = FakeRepo::default();
    repo.edit();
    let publisher = publisher(&repo, temp.path());

    let first = publisher.run().unwrap();
    let second = publisher.run().unwrap();

    assert!(matches!(first, PublishOutcome::Pushed { .. }));
    assert_eq!(second, PublishOutcome::NothingToCommit);
    assert_eq!(*repo.commits.borrow(), [DEFAULT_COMMIT_MESSAGE]);
    assert_eq!(repo.pushes.borrow().len(), 1);

    repo.edit();
    assert!(matches!(
        publisher.run().unwrap(),
        PublishOutcome::Pushed { .. }
    ));
    assert_eq!(repo.commits.borrow().len(), 2);
}

#[test]
fn test_custom_settings_are_used() {
    let temp = temp_dir();
    let runner = ScriptedRunner::new().with_exit("diff", 1);
    let publisher = Publisher::builder()
        .with_runner(runner)
        .with_repo(temp.path().to_path_buf())
        .with_settings(PublishSettings {
            message: "chore: sync".to_string(),
            remote: "upstream".to_string(),
            branch: "main".to_string(),
        })
        .build();

    publisher.run().unwrap();

    let calls = publisher.runner().calls();
    assert_eq!(calls[2], "commit -m chore: sync");
    assert_eq!(calls[3], "push upstream main");
}

#[test]
fn test_dry_run_executes_nothing_mutating() {
    let temp = temp_dir();
    let runner = ScriptedRunner::new().with_stdout("status", "?? a.txt\0 M b.txt\0");
    let publisher = Publisher::builder()
        .with_runner(runner)
        .with_repo(temp.path().to_path_buf())
        .with_dry_run(true)
        .build();

    let outcome = publisher.run().unwrap();

    assert_eq!(outcome, PublishOutcome::DryRun { pending: 2 });
    assert_eq!(publisher.runner().calls(), ["status --porcelain -z"]);
}

#[test]
fn test_outcome_display() {
    let lines: Vec<_> = [
        PublishOutcome::NothingToCommit,
        PublishOutcome::Pushed {
            remote: "origin".to_string(),
            branch: "main".to_string(),
        },
        PublishOutcome::DryRun { pending: 0 },
        PublishOutcome::DryRun { pending: 3 },
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    insta::assert_debug_snapshot!(lines, @r#"
    [
        "No changes to commit",
        "Successfully pushed to origin/main",
        "Dry run: no changes to commit",
        "Dry run: 3 path(s) would be committed and pushed",
    ]
    "#);
}
