// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable map handed to child processes.
//!
//! ```text
//! Env
//! vars: BTreeMap<EnvKey, OsString>   (deterministic order)
//! merge(pairs, policy) --> number of keys written
//! ```
//!
//! Names and values are OS strings, so inherited variables that are not
//! valid Unicode reach the child unchanged.

use super::types::{EnvKey, MergePolicy};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// A set of environment variables.
///
/// Built once from the inherited environment and passed explicitly to the
/// spawn call; the process environment itself is never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<EnvKey, OsString>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> &mut Self {
        self.vars.insert(EnvKey::new(key), value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars
            .get(&EnvKey::new(key.as_ref()))
            .map(OsString::as_os_str)
    }

    /// Applies `pairs` according to `policy`.
    ///
    /// Returns how many keys were written. Under [`MergePolicy::KeepExisting`]
    /// a key that is already present is left untouched, including when the
    /// same key appears twice in `pairs`.
    pub fn merge<I, K, V>(&mut self, pairs: I, policy: MergePolicy) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut written = 0;
        for (key, value) in pairs {
            let key = EnvKey::new(key);
            if policy == MergePolicy::KeepExisting && self.vars.contains_key(&key) {
                continue;
            }
            self.vars.insert(key, value.into());
            written += 1;
        }
        written
    }

    /// Returns the `PATH` entries as an `OsString` suitable for `which_in`.
    #[must_use]
    pub fn search_path(&self) -> Option<OsString> {
        self.get("PATH").map(OsStr::to_os_string)
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl<K: Into<OsString>, V: Into<OsString>> FromIterator<(K, V)> for Env {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut env = Self::new();
        env.merge(iter, MergePolicy::Override);
        env
    }
}
