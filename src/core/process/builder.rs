// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new/resolve/raw
//!  • args/cwd/env/name
//!
//! ProcessOutput { termination, stdout: Vec<u8>, stderr: Vec<u8> }
//! Termination: Exited(code) | Signaled(signal)
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::core::env::container::Env;
use crate::error::ProcessError;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Normal exit with the given code (any value, zero or not).
    Exited(i32),
    /// Killed by a signal (Unix only).
    Signaled(i32),
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Signaled(signal);
            }
        }
        Self::Exited(-1)
    }
}

/// Output from a completed process.
///
/// Both streams are kept as raw bytes so they can be relayed unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    termination: Termination,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl Default for ProcessOutput {
    fn default() -> Self {
        Self::new(Termination::Exited(0), Vec::new(), Vec::new())
    }
}

impl ProcessOutput {
    #[must_use]
    pub const fn new(termination: Termination, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            termination,
            stdout,
            stderr,
        }
    }

    #[must_use]
    pub const fn termination(&self) -> Termination {
        self.termination
    }

    #[must_use]
    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }
}

/// Builder for configuring and running a process.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    /// Path to the executable
    program: PathBuf,
    /// Command-line arguments, passed through untouched
    args: Vec<OsString>,
    /// Working directory
    cwd: Option<PathBuf>,
    /// Complete environment for the child (replaces the inherited one)
    env: Option<Env>,
    /// Display name for logging
    name: Option<String>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// A bare name is looked up by the OS in the parent's `PATH` when the
    /// process is spawned. Use [`ProcessBuilder::resolve`] to search the
    /// child's environment instead.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: None,
            name: None,
        }
    }

    /// Creates a `ProcessBuilder` after resolving `program` against the
    /// `PATH` of `env`, relative to `cwd`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::ExecutableNotFound`] if no executable matches.
    pub fn resolve(program: &str, env: &Env, cwd: &Path) -> Result<Self, ProcessError> {
        Self::find(program, env, cwd)
            .map(|path| Self::new(path).name(program))
            .ok_or_else(|| ProcessError::ExecutableNotFound {
                name: program.to_string(),
            })
    }

    /// Finds the full path to an executable using the `PATH` of `env`.
    #[must_use]
    pub(super) fn find(program: &str, env: &Env, cwd: &Path) -> Option<PathBuf> {
        which::which_in(program, env.search_path(), cwd).ok()
    }

    /// Creates a `ProcessBuilder` from a raw command string.
    ///
    /// On Windows, this executes the command via `cmd /C`.
    /// On Unix, this executes via `/bin/sh -c`.
    pub fn raw(command: impl Into<String>) -> Self {
        let cmd = command.into();
        #[cfg(windows)]
        {
            Self::new("cmd").args(["/C", cmd.as_str()])
        }
        #[cfg(not(windows))]
        {
            Self::new("/bin/sh").args(["-c", cmd.as_str()])
        }
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Sets the working directory for the process.
    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the complete environment for the process.
    #[must_use]
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Sets a display name for logging.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    #[must_use]
    pub fn args_slice(&self) -> &[OsString] {
        &self.args
    }

    pub(super) const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    pub(super) const fn environment(&self) -> Option<&Env> {
        self.env.as_ref()
    }

    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
