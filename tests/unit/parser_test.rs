//! Tests for the participant and exclusion parsers

use secret_santa::SantaError;
use secret_santa::parser::{parse_exclusions, parse_participants};

fn raw(participants: &[secret_santa::Participant]) -> Vec<&str> {
    participants.iter().map(secret_santa::Participant::as_str).collect()
}

// =============================================================================
// Participant Parsing
// =============================================================================

#[test]
fn header_line_is_dropped() {
    let participants = parse_participants("#Names\nalice\nbob\ncarol\n");
    assert_eq!(raw(&participants), ["alice", "bob", "carol"]);
}

#[test]
fn names_are_trimmed_and_lowercased() {
    let participants = parse_participants("  Alice  \nBOB\n\tCarol\n");
    assert_eq!(raw(&participants), ["alice", "bob", "carol"]);
}

#[test]
fn blank_lines_are_ignored() {
    let participants = parse_participants("\nalice\n\n   \nbob\n\n");
    assert_eq!(raw(&participants), ["alice", "bob"]);
}

#[test]
fn header_after_leading_blank_lines_is_still_first_entry() {
    let participants = parse_participants("\n\n# people\nalice\nbob\n");
    assert_eq!(raw(&participants), ["alice", "bob"]);
}

#[test]
fn later_comment_lines_are_participants() {
    let participants = parse_participants("alice\n#bob\ncarol\n");
    assert_eq!(raw(&participants), ["alice", "#bob", "carol"]);
}

#[test]
fn only_the_first_header_is_dropped() {
    let participants = parse_participants("#Names\n#More\nalice\n");
    assert_eq!(raw(&participants), ["#more", "alice"]);
}

#[test]
fn duplicates_are_kept() {
    let participants = parse_participants("alice\nAlice\nbob\n");
    assert_eq!(raw(&participants), ["alice", "alice", "bob"]);
}

#[test]
fn crlf_line_endings_are_handled() {
    let participants = parse_participants("#Names\r\nalice\r\nbob\r\n");
    assert_eq!(raw(&participants), ["alice", "bob"]);
}

#[test]
fn empty_file_has_no_participants() {
    assert!(parse_participants("").is_empty());
    assert!(parse_participants("#header only\n").is_empty());
}

// =============================================================================
// Exclusion Parsing
// =============================================================================

#[test]
fn pairs_are_normalized() {
    let set = parse_exclusions(" Alice , BOB \n").unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.contains(&"alice".into(), &"bob".into()));
}

#[test]
fn comment_lines_are_skipped_anywhere() {
    let set = parse_exclusions("alice,bob\n#comment,ignored\ncarol,dave\n#trailing\n").unwrap();
    assert_eq!(set.len(), 2);
    assert!(!set.contains(&"#comment".into(), &"ignored".into()));
}

#[test]
fn header_comment_is_skipped() {
    let set = parse_exclusions("#giver,receiver\nalice,bob\n").unwrap();
    assert_eq!(set.len(), 1);
}

#[test]
fn blank_lines_are_skipped() {
    let set = parse_exclusions("alice,bob\n\n   \ncarol,dave\n").unwrap();
    assert_eq!(set.len(), 2);
}

#[test]
fn duplicate_pairs_collapse() {
    let set = parse_exclusions("alice,bob\nALICE,Bob\n").unwrap();
    assert_eq!(set.len(), 1);
}

#[test]
fn single_field_line_is_rejected() {
    let err = parse_exclusions("alice,bob\ncarol\n").unwrap_err();
    assert!(matches!(err, SantaError::MalformedExclusion { line: 2, fields: 1 }));
}

#[test]
fn three_field_line_is_rejected() {
    let err = parse_exclusions("alice,bob,carol\n").unwrap_err();
    assert!(matches!(err, SantaError::MalformedExclusion { line: 1, fields: 3 }));
}

#[test]
fn empty_field_is_rejected() {
    let err = parse_exclusions("#header\nalice,\n").unwrap_err();
    assert!(matches!(err, SantaError::MalformedExclusion { line: 2, fields: 1 }));
}

#[test]
fn malformed_message_names_the_line() {
    let err = parse_exclusions("alice;bob\n").unwrap_err();
    assert!(err.to_string().contains("line 1"));
}
