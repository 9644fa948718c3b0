//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use std::io::{self, Write};
use std::path::PathBuf;

use secret_santa::output::{DrawResult, ErrorResult, OutputMode};
use secret_santa::{Assignment, Draw, SantaError};

fn sample_draw() -> Draw {
    let mut assignment = Assignment::new();
    assignment.insert("alice".into(), "bob".into());
    assignment.insert("bob".into(), "carol".into());
    assignment.insert("carol".into(), "alice".into());
    Draw {
        assignment,
        attempts: 3,
    }
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// DrawResult Tests
// =============================================================================

#[test]
fn human_lines_follow_giver_order() {
    let result = DrawResult::from(&sample_draw());
    assert_eq!(result.human_lines(), ["alice -> bob", "bob -> carol", "carol -> alice"]);
}

#[test]
fn draw_result_serialization() {
    let result = DrawResult::from(&sample_draw());

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("\"attempts\":3"));
    assert!(json.contains("{\"giver\":\"alice\",\"receiver\":\"bob\"}"));
}

// =============================================================================
// ErrorResult Tests
// =============================================================================

#[test]
fn insufficient_error_line() {
    let result = ErrorResult::from(&SantaError::InsufficientParticipants { count: 1 });
    assert_eq!(
        result.human_line(),
        "Error: At least two participants are required for Secret Santa."
    );
}

#[test]
fn exhausted_error_line() {
    let result = ErrorResult::from(&SantaError::AssignmentExhausted { attempts: 1000 });
    assert_eq!(
        result.human_line(),
        "Error: Failed to assign Secret Santa pairs without conflicts after 1000 attempts."
    );
}

#[test]
fn read_error_mentions_path() {
    let err = SantaError::InputRead {
        path: PathBuf::from("missing.txt"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
    };
    let result = ErrorResult::from(&err);
    assert!(result.human_line().contains("missing.txt"));
}

#[test]
fn error_result_serialization() {
    let result = ErrorResult::from(&SantaError::Config("bad".to_string()));

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":false"));
    assert!(json.contains("invalid configuration: bad"));
}

// =============================================================================
// Writer Tests
// =============================================================================

/// Writer whose every write fails, like a closed pipe
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn human_draw_written_to_buffer() {
    let mut out = Vec::new();
    DrawResult::from(&sample_draw()).write_to(&mut out, OutputMode::Human).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "alice -> bob\nbob -> carol\ncarol -> alice\n");
}

#[test]
fn json_error_written_to_buffer() {
    let mut out = Vec::new();
    ErrorResult::from(&SantaError::AssignmentExhausted { attempts: 2 })
        .write_to(&mut out, OutputMode::Json)
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["success"], false);
}

#[test]
fn draw_write_failure_is_returned() {
    let err = DrawResult::from(&sample_draw()).write_to(&mut BrokenPipe, OutputMode::Human);
    let err = err.unwrap_err();
    assert_eq!(err.downcast_ref::<io::Error>().unwrap().kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn error_write_failure_is_returned() {
    let result = ErrorResult::from(&SantaError::Config("bad".to_string()));
    assert!(result.write_to(&mut BrokenPipe, OutputMode::Human).is_err());
}
