// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          PublishError (16 bytes)
//!                   |
//!      +------------+------------+
//!      |            |            |
//!      v            v            v
//!     Git        Process       Config
//!     Box          Box          Box
//!      |            \           /
//!      v             +----+----+
//!  VersionControl         |
//!                         v
//!                     Unexpected
//!
//! Sub-errors (unboxed internally):
//!   Git     CommandFailed
//!   Process ExecutableNotFound, SpawnFailed, MissingWorkingDir
//!   Config  InvalidValue
//! ```

use std::fmt;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PublishError`].
pub type PublishResult<T> = std::result::Result<T, PublishError>;

/// The two failure classes a publish run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A git command reported failure where failure is an error.
    VersionControl,
    /// Anything else: spawn failures, missing directories or bad config.
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VersionControl => write!(f, "VersionControlError"),
            Self::Unexpected => write!(f, "UnexpectedError"),
        }
    }
}

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Git command failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process could not be started.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

impl PublishError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Git(_) => ErrorKind::VersionControl,
            Self::Process(_) | Self::Config(_) => ErrorKind::Unexpected,
        }
    }
}

/// Classify an `anyhow` error chain.
///
/// Errors that never passed through [`PublishError`] are unexpected.
#[must_use]
pub fn kind_of(err: &anyhow::Error) -> ErrorKind {
    err.downcast_ref::<PublishError>()
        .map_or(ErrorKind::Unexpected, PublishError::kind)
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PublishError {
                fn from(err: $error) -> Self {
                    PublishError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ProcessError => Process,
    ConfigError => Config,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command exited with a failure status.
    #[error("git command failed: {command} (exit code {code}) - {message}")]
    CommandFailed {
        command: String,
        code: i32,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Working directory does not exist or is not a directory.
    #[error("working directory not found: {path}")]
    MissingWorkingDir { path: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
