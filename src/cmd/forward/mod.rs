// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The forward command: env file, forge, relay.
//!
//! ```text
//! current_env() + .env  --> Env
//! cli.args              --> ForgeCommand
//! invoke()              --> Invocation
//! relay()               --> stdout bytes, stderr bytes, [exec error: ...]
//! exit_code()           --> 0, or the child's code when propagating
//! ```

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use tracing::debug;

use crate::cli::Cli;
use crate::config::Settings;
use crate::core::env::{current_env, with_env_file};
use crate::core::process::builder::Termination;
use crate::error::ShimResult;
use crate::forge::{ForgeCommand, Invocation};

/// Prefix of the single diagnostic line printed for invocation errors.
pub const DIAGNOSTIC_PREFIX: &str = "exec error: ";

/// Runs forge once with the caller's arguments and relays its output.
///
/// # Errors
///
/// Returns an error only if this process's own stdout/stderr cannot be
/// written. Forge failing to start is reported through the relay, not as an
/// error.
pub async fn run_forward_command(
    cli: &Cli,
    settings: &Settings,
    cwd: &Path,
) -> ShimResult<ExitCode> {
    let invocation = forward(cli, settings, cwd).await;

    relay(&invocation, &mut io::stdout().lock(), &mut io::stderr().lock())?;

    Ok(ExitCode::from(exit_code(
        &invocation,
        settings.propagate_exit_code,
    )))
}

/// Loads the env file and runs forge in `cwd`.
pub async fn forward(cli: &Cli, settings: &Settings, cwd: &Path) -> Invocation {
    let env = with_env_file(
        current_env(),
        &settings.env_file_in(cwd),
        settings.merge_policy(),
    );

    ForgeCommand::new(settings.program.as_str())
        .args(cli.args.iter().cloned())
        .invoke(settings.invocation, env, cwd)
        .await
}

/// Writes the captured streams, then the diagnostic line if the invocation
/// failed.
///
/// # Errors
///
/// Returns an error if either writer fails.
pub fn relay<O, E>(invocation: &Invocation, stdout: &mut O, stderr: &mut E) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    let output = invocation.output();

    stdout.write_all(output.stdout())?;
    stdout.flush()?;

    stderr.write_all(output.stderr())?;
    if let Some(error) = invocation.error() {
        debug!(error = ?error, "invocation failed");
        writeln!(stderr, "{DIAGNOSTIC_PREFIX}{error}")?;
    }
    stderr.flush()
}

/// Exit status for this process.
///
/// Always 0 unless `propagate` is set, in which case the child's exit code
/// is used. Codes outside `0..=255`, signals and invocation errors map to 1.
#[must_use]
pub fn exit_code(invocation: &Invocation, propagate: bool) -> u8 {
    if !propagate {
        return 0;
    }
    match invocation {
        Invocation::Completed(output) => match output.termination() {
            Termination::Exited(code) => u8::try_from(code).unwrap_or(1),
            Termination::Signaled(_) => 1,
        },
        Invocation::Failed { .. } => 1,
    }
}
