//! # Report Model
//!
//! The JSON document written by `mutmut-to-json`.
//!
//! ## Output Schema
//! ```json
//! {
//!   "survived": [{ "file": "billing.py", "count": 3, "mutations": [3, 4, 10] }],
//!   "killed": [],
//!   "timeout": [],
//!   "skipped": []
//! }
//! ```
//!
//! All four keys are always present, in this order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ReportResult;

// =============================================================================
// Mutant Status
// =============================================================================

/// Outcome category reported by the mutation tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutantStatus {
    /// The test-suite did not notice the mutation.
    Survived,
    /// A test failed on the mutation.
    Killed,
    /// The test-suite ran past the time limit.
    Timeout,
    /// The mutation was not run.
    Skipped,
}

impl MutantStatus {
    /// Every status, in output order.
    pub const ALL: [MutantStatus; 4] = [
        MutantStatus::Survived,
        MutantStatus::Killed,
        MutantStatus::Timeout,
        MutantStatus::Skipped,
    ];

    /// Heading word that opens this section in the tool's text output.
    pub const fn heading(&self) -> &'static str {
        match self {
            MutantStatus::Survived => "Survived",
            MutantStatus::Killed => "Killed",
            MutantStatus::Timeout => "Timeout",
            MutantStatus::Skipped => "Skipped",
        }
    }

    /// Matches a trimmed line against the section headings.
    ///
    /// Headings carry decoration after the word (`Survived 🙁 (6)`), so only
    /// the prefix is compared.
    pub fn from_section_header(line: &str) -> Option<MutantStatus> {
        MutantStatus::ALL
            .into_iter()
            .find(|status| line.starts_with(status.heading()))
    }
}

impl fmt::Display for MutantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutantStatus::Survived => write!(f, "survived"),
            MutantStatus::Killed => write!(f, "killed"),
            MutantStatus::Timeout => write!(f, "timeout"),
            MutantStatus::Skipped => write!(f, "skipped"),
        }
    }
}

// =============================================================================
// File Entry
// =============================================================================

/// Mutants of one status in one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMutations {
    /// Source path as printed by the tool.
    pub file: String,

    /// Mutant count from the file header.
    pub count: u32,

    /// Mutated line numbers, ranges expanded, in report order.
    pub mutations: Vec<u32>,
}

impl FileMutations {
    /// Creates an entry with no line numbers yet.
    pub fn new(file: impl Into<String>, count: u32) -> Self {
        FileMutations {
            file: file.into(),
            count,
            mutations: Vec::new(),
        }
    }
}

// =============================================================================
// Report
// =============================================================================

/// Parsed report, grouped by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationReport {
    pub survived: Vec<FileMutations>,
    pub killed: Vec<FileMutations>,
    pub timeout: Vec<FileMutations>,
    pub skipped: Vec<FileMutations>,
}

impl MutationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of one status.
    pub fn section(&self, status: MutantStatus) -> &[FileMutations] {
        match status {
            MutantStatus::Survived => &self.survived,
            MutantStatus::Killed => &self.killed,
            MutantStatus::Timeout => &self.timeout,
            MutantStatus::Skipped => &self.skipped,
        }
    }

    /// Mutable entries of one status.
    pub fn section_mut(&mut self, status: MutantStatus) -> &mut Vec<FileMutations> {
        match status {
            MutantStatus::Survived => &mut self.survived,
            MutantStatus::Killed => &mut self.killed,
            MutantStatus::Timeout => &mut self.timeout,
            MutantStatus::Skipped => &mut self.skipped,
        }
    }

    /// Sum of the header counts of one status.
    pub fn mutant_count(&self, status: MutantStatus) -> u64 {
        self.section(status)
            .iter()
            .map(|entry| u64::from(entry.count))
            .sum()
    }

    /// True when no section has any entry.
    pub fn is_empty(&self) -> bool {
        MutantStatus::ALL
            .into_iter()
            .all(|status| self.section(status).is_empty())
    }

    /// Renders the report as 2-space indented JSON.
    pub fn to_json_pretty(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
