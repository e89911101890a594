// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config: GlobalConfig  [global]   dry, log levels, log file
//!         PublishConfig [publish]  repo, message, remote, branch
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::publish::{DEFAULT_BRANCH, DEFAULT_COMMIT_MESSAGE, DEFAULT_REMOTE, PublishSettings};

/// Global configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Report what would be published without running any mutating command.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Publish workflow options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    /// Working directory; the current directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<PathBuf>,
    /// Commit message.
    pub message: String,
    /// Remote to push to.
    pub remote: String,
    /// Branch to push.
    pub branch: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            repo: None,
            message: DEFAULT_COMMIT_MESSAGE.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl PublishConfig {
    /// The commit/push part of this section.
    #[must_use]
    pub fn settings(&self) -> PublishSettings {
        PublishSettings {
            message: self.message.clone(),
            remote: self.remote.clone(),
            branch: self.branch.clone(),
        }
    }

    /// Reject blank message, remote or branch.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first blank key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("message", &self.message),
            ("remote", &self.remote),
            ("branch", &self.branch),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: "publish".to_string(),
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
