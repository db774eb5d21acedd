//! # mutation-report: Mutation Testing Report Converter
//!
//! Converts the textual output of `mutmut results` into a JSON document
//! grouped by mutant status.
//!
//! ## Modules
//!
//! - [`parser`] - Line-oriented text parser
//! - [`report`] - Output model (`MutationReport`, `FileMutations`)
//! - [`config`] - TOML / environment configuration
//! - [`runner`] - Running the tool, reading and writing files
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use mutation_report::parse_report;
//!
//! let text = "Survived 🙁 (3)\n\n---- billing.py (3) ----\n\n3-4, 10\n";
//! let report = parse_report(text).unwrap();
//!
//! assert_eq!(report.survived[0].file, "billing.py");
//! assert_eq!(report.survived[0].mutations, vec![3, 4, 10]);
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod runner;

pub use config::ReportConfig;
pub use error::{ReportError, ReportResult};
pub use parser::parse_report;
pub use report::{FileMutations, MutantStatus, MutationReport};
pub use runner::{read_report_text, run_mutation_tool, write_report};

use std::path::Path;
use tracing::info;

/// Produces a report from a saved text file, or by running the tool when no
/// input is given.
pub fn collect_report(config: &ReportConfig, input: Option<&Path>) -> ReportResult<MutationReport> {
    let text = match input {
        Some(path) => read_report_text(path)?,
        None => run_mutation_tool(&config.tool)?,
    };

    let report = parse_report(&text)?;

    info!(
        survived = report.mutant_count(MutantStatus::Survived),
        killed = report.mutant_count(MutantStatus::Killed),
        timeout = report.mutant_count(MutantStatus::Timeout),
        skipped = report.mutant_count(MutantStatus::Skipped),
        "Parsed mutation report"
    );

    Ok(report)
}
