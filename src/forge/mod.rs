// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The forge invocation.
//!
//! ```text
//! ForgeCommand { program, args }
//!   command_line()  --> "forge " + join(args, " ")
//!   invoke(mode, env, cwd)
//!     Direct: which_in(env PATH) --> forge <argv...>
//!     Shell:  /bin/sh -c "forge <joined args>"
//!       --> Invocation::Completed(output)      any normal exit
//!       --> Invocation::Failed { output, error } not found / spawn / wait / signal
//! ```
//!
//! Arguments are never escaped, quoted or inspected. In direct mode they
//! reach forge as a discrete argument vector; in shell mode the naive joined
//! string is re-parsed by the shell, so quoting and expansion happen there.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::env::container::Env;
use crate::core::process::builder::{ProcessBuilder, ProcessOutput, Termination};
use crate::error::ProcessError;

/// Default name of the wrapped executable.
pub const DEFAULT_PROGRAM: &str = "forge";

/// How the forge command line reaches the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationMode {
    /// Execute the program directly with the argument vector.
    #[default]
    Direct,
    /// Hand the joined command line to the platform shell.
    Shell,
}

impl fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Shell => write!(f, "shell"),
        }
    }
}

/// Outcome of one forge run.
#[derive(Debug)]
pub enum Invocation {
    /// Forge ran and exited normally. The exit code may be nonzero.
    Completed(ProcessOutput),
    /// Forge could not be started, could not be waited on, or was killed.
    Failed {
        /// Whatever was captured before the failure (empty if nothing ran).
        output: ProcessOutput,
        /// Why forge did not complete; printed as the diagnostic line.
        error: ProcessError,
    },
}

impl Invocation {
    #[must_use]
    pub const fn output(&self) -> &ProcessOutput {
        match self {
            Self::Completed(output) | Self::Failed { output, .. } => output,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&ProcessError> {
        match self {
            Self::Completed(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    fn failed(error: ProcessError) -> Self {
        Self::Failed {
            output: ProcessOutput::default(),
            error,
        }
    }
}

/// A forge command: the program plus the caller's arguments, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeCommand {
    program: String,
    args: Vec<OsString>,
}

impl Default for ForgeCommand {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl ForgeCommand {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends the caller's arguments in order.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args_slice(&self) -> &[OsString] {
        &self.args
    }

    /// The naive command line: program, one space, then the arguments joined
    /// by single spaces.
    ///
    /// With no arguments the trailing space is kept (`"forge "`).
    #[must_use]
    pub fn command_line(&self) -> String {
        let joined = self
            .args
            .iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {joined}", self.program)
    }

    /// Builds the process for `mode` with the given environment and
    /// working directory.
    ///
    /// # Errors
    ///
    /// In [`InvocationMode::Direct`], returns
    /// [`ProcessError::ExecutableNotFound`] when the program is not on the
    /// `PATH` of `env`.
    pub fn to_process(
        &self,
        mode: InvocationMode,
        env: Env,
        cwd: &Path,
    ) -> Result<ProcessBuilder, ProcessError> {
        let builder = match mode {
            InvocationMode::Direct => {
                ProcessBuilder::resolve(&self.program, &env, cwd)?.args(&self.args)
            }
            InvocationMode::Shell => ProcessBuilder::raw(self.command_line()).name(&self.program),
        };
        Ok(builder.cwd(cwd).env(env))
    }

    /// Runs forge once and waits for it without a timeout.
    pub async fn invoke(&self, mode: InvocationMode, env: Env, cwd: &Path) -> Invocation {
        debug!(command = %self.command_line(), mode = %mode, "invoking");

        let builder = match self.to_process(mode, env, cwd) {
            Ok(builder) => builder,
            Err(error) => return Invocation::failed(error),
        };

        match builder.run().await {
            Ok(output) => match output.termination() {
                Termination::Exited(_) => Invocation::Completed(output),
                Termination::Signaled(signal) => Invocation::Failed {
                    error: ProcessError::Signaled {
                        command: self.command_line(),
                        signal,
                    },
                    output,
                },
            },
            Err(error) => Invocation::failed(error),
        }
    }
}

#[cfg(test)]
mod tests;
