//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::io::{self, Write};

use serde::Serialize;

use crate::core::services::Draw;
use crate::error::SantaError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a successful draw
#[derive(Debug, Serialize)]
pub struct DrawResult {
    /// Always `true`
    pub success: bool,
    /// Attempt that produced the draw
    pub attempts: u32,
    /// Pairs in original participant order
    pub pairs: Vec<PairInfo>,
}

/// A single giver -> receiver line
#[derive(Debug, Serialize)]
pub struct PairInfo {
    /// Who gives
    pub giver: String,
    /// Who receives
    pub receiver: String,
}

/// Result of a failed draw
#[derive(Debug, Serialize)]
pub struct ErrorResult {
    /// Always `false`
    pub success: bool,
    /// Human-readable error message
    pub error: String,
}

impl From<&Draw> for DrawResult {
    fn from(draw: &Draw) -> Self {
        Self {
            success: true,
            attempts: draw.attempts,
            pairs: draw
                .assignment
                .iter()
                .map(|pair| PairInfo {
                    giver: pair.giver.to_string(),
                    receiver: pair.receiver.to_string(),
                })
                .collect(),
        }
    }
}

impl From<&SantaError> for ErrorResult {
    fn from(err: &SantaError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}

impl DrawResult {
    /// Lines printed in human mode
    #[must_use]
    pub fn human_lines(&self) -> Vec<String> {
        self.pairs.iter().map(|p| format!("{} -> {}", p.giver, p.receiver)).collect()
    }

    /// Render the result to stdout based on output mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<()> {
        self.write_to(&mut io::stdout().lock(), mode)
    }

    /// Render the result to `out` based on output mode
    pub fn write_to<W: Write>(&self, out: &mut W, mode: OutputMode) -> anyhow::Result<()> {
        match mode {
            OutputMode::Human => {
                for line in self.human_lines() {
                    writeln!(out, "{line}")?;
                }
            },
            OutputMode::Json => writeln!(out, "{}", serde_json::to_string_pretty(self)?)?,
        }
        out.flush()?;
        Ok(())
    }
}

impl ErrorResult {
    /// Line printed in human mode
    #[must_use]
    pub fn human_line(&self) -> String {
        format!("Error: {}", self.error)
    }

    /// Render the result to stdout based on output mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<()> {
        self.write_to(&mut io::stdout().lock(), mode)
    }

    /// Render the result to `out` based on output mode
    pub fn write_to<W: Write>(&self, out: &mut W, mode: OutputMode) -> anyhow::Result<()> {
        match mode {
            OutputMode::Human => writeln!(out, "{}", self.human_line())?,
            OutputMode::Json => writeln!(out, "{}", serde_json::to_string_pretty(self)?)?,
        }
        out.flush()?;
        Ok(())
    }
}
