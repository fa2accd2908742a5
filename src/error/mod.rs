// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        ShimError (16 bytes)
//!            |
//!       +----+----+
//!       |         |
//!       v         v
//!     Config      Io
//!      Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Config   Load, InvalidValue
//!   Process  ExecutableNotFound, SpawnFailed, WaitFailed, Signaled
//!   EnvFile  Read
//! ```
//!
//! `ProcessError` is the invocation-error taxonomy: the relay prints it as a
//! single diagnostic line and never propagates it.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ShimError`].
pub type ShimResult<T> = std::result::Result<T, ShimError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum ShimError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ShimError {
                fn from(err: $error) -> Self {
                    ShimError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Settings-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or merged.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// --- Process Errors ---

/// Failures at the spawn layer, as opposed to the child exiting nonzero.
///
/// Names and command lines are rendered escaped, so each message is a
/// single line whatever the arguments contain.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: {name:?} (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process {command:?}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the child or draining its pipes failed.
    #[error("failed waiting for process {command:?}: {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process was terminated by a signal.
    #[error("process {command:?} was killed by signal {signal}")]
    Signaled { command: String, signal: i32 },
}

// --- Env File Errors ---

/// Errors reading the env file. A missing file is not an error.
#[derive(Debug, Error)]
pub enum EnvFileError {
    /// The file exists but could not be read.
    #[error("failed to read env file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
