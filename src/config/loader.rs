// git-publish: Stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! defaults
//!   < publish.toml            add_toml_file_optional
//!   < --ini FILE ...          add_toml_file
//!   < GIT_PUBLISH_GLOBAL__*   with_env_prefix / with_env_vars
//!     GIT_PUBLISH_PUBLISH__*
//!   < CLI flags               set
//!        |
//!        v
//!    build() --> Config (validated)
//! ```
//!
//! Only variables naming a known section are read, so unrelated variables
//! sharing the prefix never reach the strict deserializer.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::error::Result;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "GIT_PUBLISH";

/// Config sections an environment variable may target.
const ENV_SECTIONS: [&str; 2] = ["GLOBAL", "PUBLISH"];

/// A file that contributed to the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--ini FILE`; must exist.
    Ini(PathBuf),
    /// `publish.toml`; listed only when present.
    Default(PathBuf),
    /// Inline TOML.
    Inline,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ini(path) => write!(f, "[ini] {}", path.display()),
            Self::Default(path) => write!(f, "[default] {}", path.display()),
            Self::Inline => write!(f, "[inline] <string>"),
        }
    }
}

/// Collects configuration layers and builds a validated [`Config`].
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    sources: Vec<ConfigSource>,
    env: Option<(String, config::Map<String, String>)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            sources: Vec::new(),
            env: None,
        }
    }

    fn add_toml(mut self, path: &Path, required: bool) -> Self {
        self.builder = self.builder.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(required),
        );
        self
    }

    /// Layer a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.add_toml(path, true);
        loader.sources.push(ConfigSource::Ini(path.to_path_buf()));
        loader
    }

    /// Layer a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.add_toml(path, false);
        if path.is_file() {
            loader.sources.push(ConfigSource::Default(path.to_path_buf()));
        }
        loader
    }

    #[cfg(test)]
    pub(crate) fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Read `<PREFIX>_<SECTION>__<KEY>` variables from the process environment,
    /// e.g. `GIT_PUBLISH_PUBLISH__BRANCH=main`.
    #[must_use]
    pub fn with_env_prefix(self, prefix: &str) -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        self.with_env_vars(prefix, vars)
    }

    /// Like [`with_env_prefix`](Self::with_env_prefix), reading from `vars`
    /// instead of the process environment.
    #[must_use]
    pub fn with_env_vars<I, K, V>(mut self, prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let sections = ENV_SECTIONS.map(|section| format!("{prefix}_{section}__"));
        let known = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .filter(|(key, _): &(String, String)| {
                sections.iter().any(|section| key.starts_with(section.as_str()))
            })
            .collect();
        self.env = Some((prefix.to_string(), known));
        self
    }

    /// Override a single dotted key, e.g. `publish.branch`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be parsed.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid override for '{key}'"))?;
        Ok(self)
    }

    /// The files that make up this configuration, numbered in load order.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .zip(1..)
            .map(|(source, n)| format!("{n}. {source}"))
            .collect()
    }

    /// Merge every layer, deserialize and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing or malformed, a key is
    /// unknown, a value has the wrong type, or the publish section has a
    /// blank message, remote or branch.
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some((prefix, vars)) = self.env {
            builder = builder.add_source(
                Environment::with_prefix(&prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            );
        }
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
