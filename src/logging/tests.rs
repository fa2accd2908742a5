// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use std::path::Path;

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        "off",
        "error",
        "warn",
        "info",
        "debug",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_level_out_of_range() {
    assert!(LogLevel::from_u8(6).is_none());
    let err = LogLevel::new(9).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'log_level': log level must be 0-5, got 9");
}

#[test]
fn test_log_level_silent_has_no_tracing_level() {
    assert!(LogLevel::SILENT.to_tracing_level().is_none());
    assert_eq!(
        LogLevel::TRACE.to_tracing_level(),
        Some(tracing::Level::TRACE)
    );
}

#[test]
fn test_log_level_try_from_round_trip() {
    let level = LogLevel::try_from(4).unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(u8::from(level), 4);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .with_log_file("logs/forge-env.log".into())
        .build();
    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some(Path::new("logs/forge-env.log")));
}
