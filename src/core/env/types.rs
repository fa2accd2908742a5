// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! ```text
//! MergePolicy: KeepExisting (default) | Override
//! EnvKey: case-insensitive on Windows (PATH == Path == path),
//!         exact match elsewhere
//! ```

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

use serde::{Deserialize, Serialize};

/// How file-defined pairs combine with variables already in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Existing variables win; the file only fills gaps.
    #[default]
    KeepExisting,
    /// File values replace existing ones.
    Override,
}

/// An environment variable key, compared the way the host OS compares them.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(OsString);

impl EnvKey {
    pub(super) fn new(s: impl Into<OsString>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    #[cfg(windows)]
    fn folded(&self) -> Cow<'_, OsStr> {
        Cow::Owned(self.0.to_ascii_lowercase())
    }

    #[cfg(not(windows))]
    fn folded(&self) -> Cow<'_, OsStr> {
        Cow::Borrowed(&self.0)
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl std::hash::Hash for EnvKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded().cmp(&other.folded())
    }
}
