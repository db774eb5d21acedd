//! # Report Parser
//!
//! Reads the text printed by `mutmut results`.
//!
//! ## Input Shape
//! ```text
//! Survived 🙁 (3)             ← section heading (prefix match)
//!
//! ---- billing.py (3) ----    ← file header: path and mutant count
//!
//! 3-4, 10                     ← line numbers; ranges are inclusive
//!
//! Killed 🎉 (12)
//! ...
//! ```
//!
//! Lines before the first file header (usage hints, blank lines) are
//! ignored. A new section heading does not close the current file: line
//! numbers that follow it still belong to the last file header seen.

use tracing::{debug, trace};

use crate::error::{ReportError, ReportResult};
use crate::report::{FileMutations, MutantStatus, MutationReport};

const FILE_HEADER_PREFIX: &str = "----";

/// Parses the tool's text output into a [`MutationReport`].
///
/// ## Errors
/// - [`ReportError::HeaderOutsideSection`]: a file header precedes every heading
/// - [`ReportError::InvalidCount`]: the header count is not a number
/// - [`ReportError::InvalidRange`]: a `start-end` token is malformed
pub fn parse_report(text: &str) -> ReportResult<MutationReport> {
    let mut report = MutationReport::new();
    let mut section: Option<MutantStatus> = None;
    // Entry receiving line numbers: (section, index within section)
    let mut current: Option<(MutantStatus, usize)> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(status) = MutantStatus::from_section_header(line) {
            trace!(line_number, %status, "Entering section");
            section = Some(status);
            continue;
        }

        if line.starts_with(FILE_HEADER_PREFIX) {
            let Some((file, count)) = parse_file_header(line) else {
                debug!(line_number, line, "Skipping unrecognised header line");
                continue;
            };

            let status = section.ok_or_else(|| ReportError::HeaderOutsideSection {
                line_number,
                line: line.to_string(),
            })?;
            let count = count
                .trim()
                .parse::<u32>()
                .map_err(|_| ReportError::InvalidCount {
                    line_number,
                    value: count.to_string(),
                })?;

            let entries = report.section_mut(status);
            entries.push(FileMutations::new(file, count));
            current = Some((status, entries.len() - 1));
            continue;
        }

        let Some((status, position)) = current else {
            continue;
        };

        if let Some(entry) = report.section_mut(status).get_mut(position) {
            parse_line_numbers(line, line_number, &mut entry.mutations)?;
        }
    }

    Ok(report)
}

/// Splits `---- <file> (<count>) ----` into file and count text.
///
/// The header may sit anywhere after the leading dashes; the file name is
/// the shortest text followed by ` (` and a count closed by `) ----`.
fn parse_file_header(line: &str) -> Option<(&str, &str)> {
    line.match_indices("---- ").find_map(|(start, marker)| {
        let rest = &line[start + marker.len()..];
        rest.match_indices(" (").find_map(|(file_end, open)| {
            let after = &rest[file_end + open.len()..];
            after
                .find(") ----")
                .map(|count_end| (&rest[..file_end], &after[..count_end]))
        })
    })
}

/// Appends the line numbers of one comma-separated line.
///
/// `a-b` expands to `a..=b` (empty when `a > b`); a plain number is one line;
/// any other token is ignored.
fn parse_line_numbers(line: &str, line_number: usize, out: &mut Vec<u32>) -> ReportResult<()> {
    for token in line.split(',').map(str::trim) {
        if token.contains('-') {
            let (start, end) = parse_range(token).ok_or_else(|| ReportError::InvalidRange {
                line_number,
                token: token.to_string(),
            })?;
            out.extend(start..=end);
        } else if let Ok(value) = token.parse::<u32>() {
            out.push(value);
        } else {
            trace!(line_number, token, "Ignoring non-numeric token");
        }
    }

    Ok(())
}

fn parse_range(token: &str) -> Option<(u32, u32)> {
    let mut bounds = token.split('-').map(str::trim);
    let start = bounds.next()?.parse().ok()?;
    let end = bounds.next()?.parse().ok()?;

    match bounds.next() {
        Some(_) => None,
        None => Some((start, end)),
    }
}
