// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::container::Env;
use super::dotenv::EnvFile;
use super::types::MergePolicy;
use super::{current_env, with_env_file};
use std::ffi::OsStr;
use std::fs;

fn val(s: &str) -> Option<&OsStr> {
    Some(OsStr::new(s))
}

fn write_env_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), val("bar"));
    assert_eq!(env.get("NOTEXIST"), None);
    assert_eq!(env.len(), 1);

    env.set("FOO", "baz");
    assert_eq!(env.get("FOO"), val("baz"));
    assert_eq!(env.len(), 1);
}

#[cfg(windows)]
#[test]
fn test_env_keys_case_insensitive_on_windows() {
    let mut env = Env::new();
    env.set("Path", "C:\\bin");
    assert_eq!(env.get("PATH"), val("C:\\bin"));
}

#[cfg(not(windows))]
#[test]
fn test_env_keys_case_sensitive() {
    let mut env = Env::new();
    env.set("Path", "/bin");
    assert_eq!(env.get("PATH"), None);
    env.set("PATH", "/usr/bin");
    assert_eq!(env.len(), 2);
}

#[test]
fn test_merge_keep_existing() {
    let mut env: Env = [("RPC_URL", "http://inherited")].into_iter().collect();

    let written = env.merge(
        [("RPC_URL", "http://from-file"), ("API_KEY", "secret")],
        MergePolicy::KeepExisting,
    );

    assert_eq!(written, 1);
    assert_eq!(env.get("RPC_URL"), val("http://inherited"));
    assert_eq!(env.get("API_KEY"), val("secret"));
}

#[test]
fn test_merge_keep_existing_first_file_value_wins() {
    let mut env = Env::new();
    let written = env.merge([("A", "first"), ("A", "second")], MergePolicy::KeepExisting);
    assert_eq!(written, 1);
    assert_eq!(env.get("A"), val("first"));
}

#[test]
fn test_merge_override() {
    let mut env = Env::new();
    env.set("RPC_URL", "http://inherited");

    let written = env.merge([("RPC_URL", "http://from-file")], MergePolicy::Override);

    assert_eq!(written, 1);
    assert_eq!(env.get("RPC_URL"), val("http://from-file"));
}

#[test]
fn test_env_iteration_is_sorted() {
    let env: Env = [("B", "2"), ("A", "1"), ("C", "3")].into_iter().collect();
    let keys: Vec<_> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["A", "B", "C"]);
}

#[cfg(unix)]
#[test]
fn test_env_keeps_non_unicode_values() {
    use std::os::unix::ffi::OsStrExt;

    let value = OsStr::from_bytes(b"caf\xe9");
    let mut env = Env::new();
    env.set("WEIRD", value);
    env.merge([("WEIRD", "replaced")], MergePolicy::KeepExisting);

    assert_eq!(env.get("WEIRD"), Some(value));
}

#[test]
fn test_current_env_sees_path() {
    let env = current_env();
    if std::env::var_os("PATH").is_some() {
        assert!(env.search_path().is_some());
    }
}

#[test]
fn test_env_file_missing_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = EnvFile::load(dir.path().join(".env")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_env_file_parses_pairs_in_order() {
    let (_dir, path) = write_env_file(
        "# deployer settings\n\
         \n\
         ETH_RPC_URL=http://localhost:8545\n\
         export CHAIN_ID=31337\n\
         PRIVATE_KEY=\"0xabc def\"\n",
    );

    let file = EnvFile::load(&path).unwrap().unwrap();

    assert_eq!(file.skipped(), 0);
    insta::assert_debug_snapshot!(file.into_pairs(), @r#"
    [
        (
            "ETH_RPC_URL",
            "http://localhost:8545",
        ),
        (
            "CHAIN_ID",
            "31337",
        ),
        (
            "PRIVATE_KEY",
            "0xabc def",
        ),
    ]
    "#);
}

#[test]
fn test_env_file_skips_malformed_lines() {
    let (_dir, path) = write_env_file("GOOD=1\nthis is not an assignment\nALSO_GOOD=2\n");

    let file = EnvFile::load(&path).unwrap().unwrap();

    assert_eq!(file.skipped(), 1);
    assert_eq!(
        file.into_pairs(),
        [
            ("GOOD".to_string(), "1".to_string()),
            ("ALSO_GOOD".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn test_env_file_invalid_utf8_keeps_other_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, b"A=1\nJUNK=\xff\xfe\nB=2\n").unwrap();

    let pairs = EnvFile::load(&path).unwrap().unwrap().into_pairs();

    assert_eq!(
        pairs,
        [
            ("A".to_string(), "1".to_string()),
            ("JUNK".to_string(), "\u{fffd}\u{fffd}".to_string()),
            ("B".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn test_env_file_strips_utf8_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, b"\xEF\xBB\xBFA=1\nB=2\n").unwrap();

    let merged = with_env_file(Env::new(), &path, MergePolicy::KeepExisting);

    assert_eq!(merged.get("A"), val("1"));
    assert_eq!(merged.get("B"), val("2"));
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_with_env_file_missing_file_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let base: Env = [("KEEP", "me")].into_iter().collect();

    let merged = with_env_file(
        base.clone(),
        &dir.path().join(".env"),
        MergePolicy::KeepExisting,
    );

    assert_eq!(merged, base);
}

#[test]
fn test_with_env_file_does_not_touch_process_env() {
    let (_dir, path) = write_env_file("FORGE_ENV_TEST_ONLY_IN_FILE=1\n");

    let merged = with_env_file(Env::new(), &path, MergePolicy::KeepExisting);

    assert_eq!(merged.get("FORGE_ENV_TEST_ONLY_IN_FILE"), val("1"));
    assert!(std::env::var_os("FORGE_ENV_TEST_ONLY_IN_FILE").is_none());
}

#[test]
fn test_with_env_file_respects_policy() {
    let (_dir, path) = write_env_file("SHARED=file\nONLY_FILE=yes\n");
    let base: Env = [("SHARED", "inherited")].into_iter().collect();

    let kept = with_env_file(base.clone(), &path, MergePolicy::KeepExisting);
    let overridden = with_env_file(base, &path, MergePolicy::Override);

    assert_eq!(kept.get("SHARED"), val("inherited"));
    assert_eq!(overridden.get("SHARED"), val("file"));
    assert_eq!(kept.get("ONLY_FILE"), val("yes"));
    assert_eq!(overridden.get("ONLY_FILE"), val("yes"));
}
