// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! current_env() ----------+
//!                         v
//! EnvFile::load(.env) --> Env::merge(pairs, MergePolicy) --> child Env
//! ```
//!
//! - **Explicit**: the merged map is passed to the spawn call, the process
//!   environment is only ever read
//! - **Case-insensitive on Windows**
//! - **Forgiving**: a missing or unreadable env file leaves the inherited
//!   environment unchanged

pub mod container;
pub mod dotenv;
pub mod types;

#[cfg(test)]
mod tests;

use std::path::Path;

use tracing::{debug, warn};

use container::Env;
use dotenv::EnvFile;
use types::MergePolicy;

/// Captures the current process environment, byte for byte.
#[must_use]
pub fn current_env() -> Env {
    std::env::vars_os().collect()
}

/// Merges the env file at `path` into `base`.
///
/// A missing file is a silent no-op. A file that exists but cannot be read
/// is reported with a warning and otherwise ignored.
#[must_use]
pub fn with_env_file(mut base: Env, path: &Path, policy: MergePolicy) -> Env {
    match EnvFile::load(path) {
        Ok(Some(file)) => {
            let skipped = file.skipped();
            let written = base.merge(file.into_pairs(), policy);
            debug!(
                path = %path.display(),
                written,
                skipped,
                total = base.len(),
                policy = ?policy,
                "applied env file"
            );
        }
        Ok(None) => {}
        Err(e) => warn!("{e}"),
    }
    base
}
