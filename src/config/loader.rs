// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .with_env_prefix()
//!   .with_env_source(vars)
//!        |
//!        v
//!    build() --> Settings
//! ```
//!
//! Only `<PREFIX>_<KEY>` variables naming a known setting are read. Other
//! variables that happen to share the prefix are left alone.

use std::collections::HashMap;
use std::path::Path;

use config::{Environment, File, FileFormat};

use super::Settings;
use crate::error::ConfigError;

/// Builder for loading settings from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_source: HashMap<String, String>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_source: HashMap::new(),
        }
    }

    /// Adds a TOML settings file that must exist.
    #[must_use]
    pub fn add_toml_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(true));
        self
    }

    /// Adds a TOML settings file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(false));
        self
    }

    #[cfg(test)]
    pub(crate) fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Reads `<PREFIX>_<KEY>` variables, e.g. `FORGE_ENV_ENV_FILE`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Variables searched for `<PREFIX>_<KEY>` settings.
    #[must_use]
    pub fn with_env_source(mut self, vars: HashMap<String, String>) -> Self {
        self.env_source = vars;
        self
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required settings file is missing or is invalid TOML.
    /// - A value has the wrong type or a settings file has an unknown key.
    /// - The merged settings fail validation.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let builder = match &self.env_prefix {
            Some(prefix) => {
                let vars = self
                    .env_source
                    .into_iter()
                    .filter(|(key, _)| setting_key(key, prefix).is_some())
                    .collect();
                self.builder.add_source(
                    Environment::with_prefix(prefix)
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true)
                        .source(Some(vars)),
                )
            }
            None => self.builder,
        };
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

/// The setting named by `var`, if it is `<prefix>_<known key>`.
fn setting_key(var: &str, prefix: &str) -> Option<&'static str> {
    let head = var.get(..prefix.len())?;
    let rest = var.get(prefix.len()..)?.strip_prefix('_')?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    Settings::KEYS
        .iter()
        .copied()
        .find(|key| key.eq_ignore_ascii_case(rest))
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
