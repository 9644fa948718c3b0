//! Text parsers for the participant and exclusion file formats
//!
//! Both parsers work on file contents already in memory; reading the files
//! is the job of [`crate::adapters::file`].
//!
//! Participant files hold one name per line. Blank lines are ignored and a
//! first entry starting with `#` is treated as a header and dropped. Only
//! the first entry is checked: a later `#bob` is a participant.
//!
//! Exclusion files hold one `giver,receiver` pair per line. Lines starting
//! with `#` are comments wherever they appear, and blank lines are skipped.

use log::debug;

use crate::core::models::{Exclusion, ExclusionSet, Participant, normalize};
use crate::error::{Result, SantaError};

/// Comment marker for both file formats
pub const COMMENT_MARKER: char = '#';

/// Field separator for exclusion lines
pub const EXCLUSION_SEPARATOR: char = ',';

/// Parse a participant list
#[must_use]
pub fn parse_participants(content: &str) -> Vec<Participant> {
    let mut participants: Vec<Participant> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Participant::new)
        .collect();

    if participants.first().is_some_and(Participant::is_comment) {
        participants.remove(0);
    }

    debug!("Parsed {} participant(s)", participants.len());
    participants
}

/// Parse an exclusion list
///
/// # Errors
///
/// Returns [`SantaError::MalformedExclusion`] for a line that is not a
/// comment and does not hold exactly two non-empty names.
pub fn parse_exclusions(content: &str) -> Result<ExclusionSet> {
    let mut exclusions = ExclusionSet::new();

    for (index, line) in content.lines().enumerate() {
        if line.starts_with(COMMENT_MARKER) || line.trim().is_empty() {
            continue;
        }
        exclusions.insert(parse_exclusion_line(line, index + 1)?);
    }

    debug!("Parsed {} exclusion(s)", exclusions.len());
    Ok(exclusions)
}

fn parse_exclusion_line(line: &str, line_number: usize) -> Result<Exclusion> {
    let fields: Vec<String> = line.split(EXCLUSION_SEPARATOR).map(normalize).collect();
    let filled = fields.iter().filter(|f| !f.is_empty()).count();

    match fields.as_slice() {
        [giver, receiver] if !giver.is_empty() && !receiver.is_empty() => Ok(Exclusion {
            giver: Participant::new(giver),
            receiver: Participant::new(receiver),
        }),
        _ => Err(SantaError::MalformedExclusion {
            line: line_number,
            fields: filled,
        }),
    }
}
