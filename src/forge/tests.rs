// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ForgeCommand, Invocation, InvocationMode};
use crate::core::env::container::Env;
use crate::core::process::builder::Termination;
use crate::error::ProcessError;
use std::ffi::OsString;
use std::path::Path;

/// Writes an executable `forge` shell script into `dir`.
#[cfg(unix)]
fn fake_forge(dir: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("forge");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

fn env_with_path(dir: &Path) -> Env {
    let mut env = Env::new();
    env.set("PATH", dir);
    env
}

#[test]
fn test_command_line_joins_with_single_spaces() {
    let cmd = ForgeCommand::default().args(["build", "--optimize"]);
    insta::assert_snapshot!(cmd.command_line(), @"forge build --optimize");
}

#[test]
fn test_command_line_empty_args_keeps_trailing_space() {
    assert_eq!(ForgeCommand::default().command_line(), "forge ");
}

#[test]
fn test_command_line_does_not_quote() {
    let cmd = ForgeCommand::default().args(["script", "a b", "$HOME", ""]);
    assert_eq!(cmd.command_line(), "forge script a b $HOME ");
}

#[test]
fn test_args_are_kept_verbatim() {
    let cmd = ForgeCommand::new("forge").args(["test", "--match-test", "test_*"]);
    assert_eq!(
        cmd.args_slice(),
        [
            OsString::from("test"),
            OsString::from("--match-test"),
            OsString::from("test_*"),
        ]
    );
    assert_eq!(cmd.program(), "forge");
}

#[test]
fn test_invocation_mode_display() {
    assert_eq!(InvocationMode::default().to_string(), "direct");
    assert_eq!(InvocationMode::Shell.to_string(), "shell");
}

#[test]
fn test_to_process_direct_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = ForgeCommand::default()
        .to_process(InvocationMode::Direct, env_with_path(dir.path()), dir.path())
        .unwrap_err();
    assert!(matches!(err, ProcessError::ExecutableNotFound { ref name } if name == "forge"));
}

#[cfg(unix)]
#[test]
fn test_to_process_shell_passes_joined_line() {
    let dir = tempfile::tempdir().unwrap();
    let builder = ForgeCommand::default()
        .args(["build", "--sizes"])
        .to_process(InvocationMode::Shell, Env::new(), dir.path())
        .unwrap();
    assert_eq!(builder.program(), Path::new("/bin/sh"));
    assert_eq!(
        builder.args_slice(),
        [OsString::from("-c"), OsString::from("forge build --sizes")]
    );
}

#[tokio::test]
async fn test_invoke_missing_program_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let invocation = ForgeCommand::new("forge")
        .args(["build"])
        .invoke(InvocationMode::Direct, env_with_path(dir.path()), dir.path())
        .await;

    let Invocation::Failed { output, error } = invocation else {
        panic!("expected a failed invocation");
    };
    assert!(output.stdout().is_empty());
    assert!(output.stderr().is_empty());
    assert!(error.to_string().contains("forge"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_invoke_direct_passes_argument_vector() {
    let dir = tempfile::tempdir().unwrap();
    fake_forge(dir.path(), r#"for a in "$@"; do printf '[%s]' "$a"; done"#);

    let invocation = ForgeCommand::default()
        .args(["script", "a b", "$HOME"])
        .invoke(InvocationMode::Direct, env_with_path(dir.path()), dir.path())
        .await;

    assert!(invocation.error().is_none());
    assert_eq!(invocation.output().stdout(), b"[script][a b][$HOME]");
}

#[cfg(unix)]
#[tokio::test]
async fn test_invoke_shell_reinterprets_joined_line() {
    let dir = tempfile::tempdir().unwrap();
    fake_forge(dir.path(), r#"for a in "$@"; do printf '[%s]' "$a"; done"#);

    let invocation = ForgeCommand::default()
        .args(["script", "a b"])
        .invoke(InvocationMode::Shell, env_with_path(dir.path()), dir.path())
        .await;

    assert!(invocation.error().is_none());
    assert_eq!(invocation.output().stdout(), b"[script][a][b]");
}

#[cfg(unix)]
#[tokio::test]
async fn test_invoke_nonzero_exit_is_completed() {
    let dir = tempfile::tempdir().unwrap();
    fake_forge(dir.path(), "echo 'Error: compilation failed' >&2; exit 1");

    let invocation = ForgeCommand::default()
        .args(["build"])
        .invoke(InvocationMode::Direct, env_with_path(dir.path()), dir.path())
        .await;

    let Invocation::Completed(output) = invocation else {
        panic!("nonzero exit must not be an invocation error");
    };
    assert_eq!(output.termination(), Termination::Exited(1));
    assert_eq!(output.stderr(), b"Error: compilation failed\n");
}

#[cfg(unix)]
#[tokio::test]
async fn test_invoke_signal_is_failure() {
    let dir = tempfile::tempdir().unwrap();
    fake_forge(dir.path(), "echo partial; kill -9 $$");

    let invocation = ForgeCommand::default()
        .invoke(InvocationMode::Direct, env_with_path(dir.path()), dir.path())
        .await;

    let Invocation::Failed { output, error } = invocation else {
        panic!("signal termination must be an invocation error");
    };
    assert_eq!(output.stdout(), b"partial\n");
    assert!(matches!(error, ProcessError::Signaled { signal: 9, .. }));
}
