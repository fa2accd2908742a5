// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for forge-env using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! forge-env [FORGE_ARGS]...
//!
//! argv[0] "--" argv[1..]   ← escape inserted before clap sees the args
//! ```
//!
//! The shim owns no flags: `--help`, `-V` and a leading `--` all belong to
//! forge. Settings come from `forge-env.toml` and `FORGE_ENV_*` instead.


use clap::Parser;
use std::ffi::OsString;

/// Loads `.env` and forwards every argument to forge.
#[derive(Debug, Parser)]
#[command(
    name = "forge-env",
    author,
    version,
    about = "Loads .env and runs forge with the given arguments",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Arguments forwarded to forge, verbatim and in order.
    #[arg(value_name = "FORGE_ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

/// Parses the process command line.
#[must_use]
pub fn parse() -> Cli {
    parse_from(std::env::args_os())
}

/// Parses a command line whose first item is the program name.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::parse_from(escaped(iter))
}

/// Tries to parse a command line, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if clap rejects the arguments.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(escaped(iter))
}

/// Puts `--` right after the program name so clap treats every user
/// argument as a positional value.
fn escaped<I, T>(iter: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = iter.into_iter().map(Into::into);
    let program = iter.next().unwrap_or_else(|| OsString::from("forge-env"));
    std::iter::once(program)
        .chain(std::iter::once(OsString::from("--")))
        .chain(iter)
        .collect()
}
