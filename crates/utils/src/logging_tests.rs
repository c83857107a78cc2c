// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    lower = { "debug", Level::DEBUG },
    upper = { "WARN", Level::WARN },
    padded = { " info ", Level::INFO },
)]
fn parses_levels(raw: &str, expected: Level) {
    assert_eq!(StreamLogger::new("svc", raw).unwrap().level(), expected);
}

#[test]
fn rejects_unknown_level() {
    let err = StreamLogger::new("svc", "loud").unwrap_err();
    assert!(matches!(err, LoggingError::InvalidLevel(ref l) if l == "loud"));
}

#[test]
fn filter_is_scoped_to_target() {
    let logger = StreamLogger::new("billing", "debug").unwrap();
    assert_eq!(logger.filter().to_string(), "billing=debug");
}

#[test]
fn empty_target_filters_everything() {
    let logger = StreamLogger::new("", "error").unwrap();
    assert_eq!(logger.filter().to_string(), "error");
}

#[test]
fn built_subscriber_honours_level() {
    let logger = StreamLogger::new("interval_utils", "warn")
        .unwrap()
        .with_format(LogFormat::Compact);
    tracing::subscriber::with_default(logger.build(), || {
        assert!(tracing::enabled!(target: "interval_utils", Level::WARN));
        assert!(!tracing::enabled!(target: "interval_utils", Level::INFO));
        assert!(!tracing::enabled!(target: "other", Level::ERROR));
    });
}

#[test]
fn second_global_init_fails() {
    let logger = StreamLogger::new("interval_utils", "info").unwrap();
    let _ = logger.init();
    assert!(matches!(logger.init(), Err(LoggingError::Init(_))));
}
