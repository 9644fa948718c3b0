use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::models::{ExclusionSet, Participant};
use crate::core::ports::RosterSource;
use crate::error::{Result, SantaError};
use crate::parser::{parse_exclusions, parse_participants};

/// Roster stored in plain-text files
#[derive(Debug, Clone)]
pub struct FileRoster {
    participants: PathBuf,
    exclusions: Option<PathBuf>,
}

impl FileRoster {
    /// Create a roster reading participants from `participants`
    pub fn new(participants: impl Into<PathBuf>) -> Self {
        Self {
            participants: participants.into(),
            exclusions: None,
        }
    }

    /// Also read exclusions from `path`
    #[must_use]
    pub fn with_exclusions(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclusions = Some(path.into());
        self
    }

    /// Path of the exclusion file, if any
    #[must_use]
    pub fn exclusions_path(&self) -> Option<&Path> {
        self.exclusions.as_deref()
    }
}

impl RosterSource for FileRoster {
    fn participants(&self) -> Result<Vec<Participant>> {
        let content = read_to_string(&self.participants)?;
        Ok(parse_participants(&content))
    }

    fn exclusions(&self) -> Result<ExclusionSet> {
        match &self.exclusions {
            Some(path) => parse_exclusions(&read_to_string(path)?),
            None => Ok(ExclusionSet::new()),
        }
    }
}

/// Read a whole UTF-8 file, tagging failures with the path
///
/// # Errors
///
/// Returns [`SantaError::InputRead`] if the file is missing, unreadable or
/// not valid UTF-8.
pub fn read_to_string(path: &Path) -> Result<String> {
    debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|source| SantaError::InputRead {
        path: path.to_path_buf(),
        source,
    })
}
