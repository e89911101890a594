// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. publish.toml (cwd, optional)
//! 3. --ini FILE (repeatable, required)
//! 4. GIT_PUBLISH_{GLOBAL,PUBLISH}__* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GIT_PUBLISH_GLOBAL__DRY=true       → global.dry = true
//! GIT_PUBLISH_PUBLISH__BRANCH=main   → publish.branch = "main"
//! GIT_PUBLISH_PUBLISH__REPO=/src/app → publish.repo = "/src/app"
//! GIT_PUBLISH_TOKEN=...              → ignored
//! ```
//!
//! # Example
//!
//! ```toml
//! [global]
//! output_log_level = 3
//!
//! [publish]
//! repo = "/srv/project"
//! branch = "release/next"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;
use crate::error::Result;

use loader::ConfigLoader;
use types::{GlobalConfig, PublishConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// What to publish and where.
    pub publish: PublishConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use git_publish::config::Config;
    /// use git_publish::config::loader::ENV_PREFIX;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("publish.toml")
    ///     .with_env_prefix(ENV_PREFIX)
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    #[cfg(test)]
    pub(crate) fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank publish message,
    /// remote or branch.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.publish.validate()
    }

    /// Format configuration options for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("global.dry", self.global.dry.to_string());
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file", log_file.display().to_string());
        }
        if let Some(repo) = &self.publish.repo {
            options.insert("publish.repo", repo.display().to_string());
        }
        options.insert("publish.message", self.publish.message.clone());
        options.insert("publish.remote", self.publish.remote.clone());
        options.insert("publish.branch", self.publish.branch.clone());

        let max_key_len = options.keys().map(|key| key.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
