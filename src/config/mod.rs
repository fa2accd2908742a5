// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for forge-env itself.
//!
//! The shim takes no flags (every argument belongs to forge), so its own
//! behavior is configured from files and environment variables.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. forge-env.toml (cwd, optional)
//! 3. $FORGE_ENV_CONFIG (required if set)
//! 4. FORGE_ENV_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! FORGE_ENV_PROGRAM=forge       → program = "forge"
//! FORGE_ENV_ENV_FILE=.env.local → env_file = ".env.local"
//! FORGE_ENV_INVOCATION=shell    → invocation = "shell"
//! FORGE_ENV_LOG_LEVEL=4         → log_level = 4
//! FORGE_ENV_CONFIG=ci.toml      → extra settings file, not a setting
//! FORGE_ENV_ANYTHING_ELSE=1     → ignored
//! ```

pub mod loader;


use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::env::types::MergePolicy;
use crate::error::{ConfigError, ShimResult};
use crate::forge::{DEFAULT_PROGRAM, InvocationMode};
use crate::logging::{LogConfig, LogLevel};

use loader::ConfigLoader;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "forge-env.toml";

/// Prefix of the settings environment variables.
pub const ENV_PREFIX: &str = "FORGE_ENV";

/// Names an extra settings file, loaded after [`SETTINGS_FILE`].
pub const CONFIG_PATH_VAR: &str = "FORGE_ENV_CONFIG";

/// Default env file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Complete settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Executable to forward to.
    pub program: String,
    /// Env file, relative to the working directory unless absolute.
    pub env_file: PathBuf,
    /// Let env file values replace inherited variables.
    pub env_override: bool,
    /// Direct exec or through the shell.
    pub invocation: InvocationMode,
    /// Exit with the child's code instead of always 0.
    pub propagate_exit_code: bool,
    /// Console log level (0-5).
    pub log_level: LogLevel,
    /// Log file level (0-5).
    pub file_log_level: LogLevel,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            env_override: false,
            invocation: InvocationMode::Direct,
            propagate_exit_code: false,
            log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

impl Settings {
    /// Every key accepted in a settings file or as `FORGE_ENV_<KEY>`.
    pub const KEYS: [&'static str; 8] = [
        "program",
        "env_file",
        "env_override",
        "invocation",
        "propagate_exit_code",
        "log_level",
        "file_log_level",
        "log_file",
    ];

    /// Checks values that deserialize fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty `program` or
    /// `env_file`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "program".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.env_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "env_file".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn merge_policy(&self) -> MergePolicy {
        if self.env_override {
            MergePolicy::Override
        } else {
            MergePolicy::KeepExisting
        }
    }

    /// Env file location for a run in `cwd`.
    #[must_use]
    pub fn env_file_in(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.env_file)
    }

    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.log_level)
            .with_file_level(self.file_log_level)
            .maybe_with_log_file(self.log_file.clone())
            .build()
    }
}

/// Builds the loader for a run in `cwd`.
#[must_use]
pub fn settings_loader(cwd: &Path, extra: Option<&Path>) -> ConfigLoader {
    let loader = ConfigLoader::new().add_toml_file_optional(cwd.join(SETTINGS_FILE));
    let loader = match extra {
        Some(path) => loader.add_toml_file(cwd.join(path)),
        None => loader,
    };
    loader.with_env_prefix(ENV_PREFIX)
}

/// Loads settings from the standard sources.
///
/// # Errors
///
/// Returns an error if a settings source is unreadable or invalid.
pub fn load_settings(cwd: &Path) -> ShimResult<Settings> {
    let extra = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
    Ok(settings_loader(cwd, extra.as_deref())
        .with_env_source(process_vars())
        .build()?)
}

/// Unicode-clean process variables; anything else cannot be a setting.
fn process_vars() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
