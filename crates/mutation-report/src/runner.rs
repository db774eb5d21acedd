//! # Runner
//!
//! The I/O edges of the converter: run the tool, read a saved report,
//! write the JSON document.

use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info, warn};

use crate::config::ToolSettings;
use crate::error::{ReportError, ReportResult};
use crate::report::MutationReport;

/// Runs the mutation tool and returns what it printed on stdout.
///
/// A non-zero exit status is only logged; the tool prints partial results
/// in that case and they are still worth converting.
pub fn run_mutation_tool(tool: &ToolSettings) -> ReportResult<String> {
    info!(command = %tool.command, args = ?tool.args, "Running mutation tool");

    let output = Command::new(&tool.command)
        .args(&tool.args)
        .output()
        .map_err(|source| ReportError::ToolSpawn {
            command: tool.command.clone(),
            source,
        })?;

    if !output.status.success() {
        warn!(
            status = %output.status,
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "Mutation tool exited with failure, parsing its output anyway"
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!(bytes = stdout.len(), "Captured mutation tool output");

    Ok(stdout)
}

/// Reads report text saved from an earlier tool run.
pub fn read_report_text(path: &Path) -> ReportResult<String> {
    debug!(?path, "Reading saved report text");
    Ok(fs::read_to_string(path)?)
}

/// Writes the report as 2-space indented JSON, creating parent directories.
pub fn write_report(report: &MutationReport, path: &Path) -> ReportResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, report.to_json_pretty()?)?;

    info!(?path, "Mutation report written");
    Ok(())
}
