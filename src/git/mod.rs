// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!          ops.rs (Git<R>)
//!   add_all  has_staged_changes
//!   commit   push   pending_paths
//!                |
//!                v
//!      ,--------------------,
//!      | runner (trait)     |
//!      '---------+----------'
//!                |
//!        +-------+-------+
//!        v               v
//!   ShellRunner      test fakes
//!   git CLI
//! ```

pub mod ops;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_utils;
