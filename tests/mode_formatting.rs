//! Integration tests for verbosity mode output contracts.
//!
//! These tests verify that verbose lines carry a strict superset of the
//! fields printed by concise lines, that the active mode is read at emission
//! time, and that every emission is exactly one newline-terminated line.

use diaglog::{CallSite, LogLevel, LogMode, Logger, Record};

fn sample_record() -> Record {
    Record::new(
        LogLevel::Error,
        "2026/08/27 10:00:00",
        CallSite::from_parts("app.c", "main", 42),
        "failed: 7",
    )
}

// ============================================================================
// Field sets per mode
// ============================================================================

/// Verifies the verbose line contains the level, timestamp, file, function,
/// line number, and interpolated message.
#[test]
fn verbose_line_contains_all_fields() {
    let mut logger = Logger::with_mode(Vec::new(), LogMode::Verbose);
    logger
        .write_record(&sample_record())
        .expect("write succeeds");

    let output = String::from_utf8(logger.into_inner()).expect("utf-8");
    assert!(output.contains("ERROR"));
    assert!(output.contains("2026/08/27 10:00:00"));
    assert!(output.contains("app.c"));
    assert!(output.contains("main"));
    assert!(output.contains("42"));
    assert!(output.contains("failed: 7"));
}

/// Verifies the concise line carries only the label and message.
#[test]
fn concise_line_has_label_and_message_only() {
    let mut logger = Logger::with_mode(Vec::new(), LogMode::Concise);
    logger
        .write_record(&sample_record())
        .expect("write succeeds");

    let output = String::from_utf8(logger.into_inner()).expect("utf-8");
    assert_eq!(output, "[ERROR] failed: 7\n");
}

/// Logging the same record once per mode yields two lines where the verbose
/// one is a strict field superset of the concise one.
#[test]
fn verbose_is_strict_superset_of_concise() {
    let mut logger = Logger::with_mode(Vec::new(), LogMode::Concise);
    logger
        .write_record(&sample_record())
        .expect("write succeeds");
    logger.set_mode(LogMode::Verbose);
    logger
        .write_record(&sample_record())
        .expect("write succeeds");

    let output = String::from_utf8(logger.into_inner()).expect("utf-8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);

    let concise = lines[0];
    let verbose = lines[1];
    assert!(verbose.len() > concise.len());
    assert!(verbose.contains("[ERROR]"));
    assert!(verbose.contains("failed: 7"));
    // Every concise field reappears verbatim in the verbose line.
    assert!(verbose.starts_with("[ERROR]"));
    assert!(verbose.ends_with("failed: 7"));
    // The verbose extras are absent from the concise line.
    assert!(!concise.contains("app.c"));
    assert!(!concise.contains("2026/08/27"));
}

// ============================================================================
// Emission contract
// ============================================================================

/// Every emission is exactly one newline-terminated line regardless of the
/// (level, mode) pair.
#[test]
fn one_line_per_emission_for_all_level_mode_pairs() {
    let levels = [
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Invalid,
    ];

    for mode in [LogMode::Verbose, LogMode::Concise] {
        let mut logger = Logger::with_mode(Vec::new(), mode);
        for level in levels {
            logger.write_record(&Record::new(
                level,
                "2026/08/27 10:00:00",
                CallSite::from_parts("app.c", "main", 1),
                "message",
            ))
            .expect("write succeeds");
        }

        let output = String::from_utf8(logger.into_inner()).expect("utf-8");
        assert_eq!(output.lines().count(), levels.len());
        assert!(output.ends_with('\n'));
    }
}

/// The mode active at the moment of the call decides the formatting; changing
/// it later never rewrites earlier lines.
#[test]
fn mode_changes_apply_only_to_subsequent_lines() {
    let mut logger = Logger::with_mode(Vec::new(), LogMode::Verbose);
    logger
        .write_record(&sample_record())
        .expect("write succeeds");
    logger.set_mode(LogMode::Concise);
    logger
        .write_record(&sample_record())
        .expect("write succeeds");

    let output = String::from_utf8(logger.into_inner()).expect("utf-8");
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].contains("app.c"));
    assert_eq!(lines[1], "[ERROR] failed: 7");
}

// ============================================================================
// Scoped overrides
// ============================================================================

/// A scoped mode override applies while the guard lives and is undone on drop.
#[test]
fn scoped_mode_round_trip() {
    let mut logger = Logger::with_mode(Vec::new(), LogMode::Verbose);
    {
        let mut scoped = logger.scoped_mode(LogMode::Concise);
        assert_eq!(scoped.previous_mode(), LogMode::Verbose);
        scoped.write_record(&sample_record()).expect("write succeeds");
    }
    logger
        .write_record(&sample_record())
        .expect("write succeeds");

    let output = String::from_utf8(logger.into_inner()).expect("utf-8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "[ERROR] failed: 7");
    assert!(lines[1].contains("app.c"));
}

/// `into_inner` keeps the override as the new baseline.
#[test]
fn scoped_mode_into_inner_keeps_override() {
    let mut logger = Logger::with_mode(Vec::<u8>::new(), LogMode::Verbose);
    {
        let scoped = logger.scoped_mode(LogMode::Concise);
        let _ = scoped.into_inner();
    }
    assert_eq!(logger.mode(), LogMode::Concise);
}
