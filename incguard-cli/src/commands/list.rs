//! List command implementation.
//!
//! This module implements the `list` command, which displays every header
//! with its canonical guard and current status in various formats (table,
//! JSON, CSV, TSV). Nothing is written.

use crate::error::CliError;
use crate::utils::{build_fixer, load_settings, GlobalOptions};
use clap::{Args, ValueEnum};
use incguard::{FileOutcome, GuardStatus};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 4] = ["path", "guard", "status", "current"];

/// List headers with their canonical guard.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "INCGUARD_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only list headers whose guard would be rewritten
    #[arg(long)]
    pub stale_only: bool,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let settings = load_settings(global)?;

        // 2. Classify every header without writing
        let report = build_fixer(&settings, false, true).run(|_| {})?;

        // 3. Apply filters
        let mut outcomes = report.outcomes;
        if self.stale_only {
            outcomes.retain(|o| o.status.changes_content());
        }

        // 4. Format and output to stdout
        match self.format {
            OutputFormat::Table => format_as_table(&outcomes)?,
            OutputFormat::Json => format_as_json(&outcomes)?,
            OutputFormat::Csv => format_as_delimited(&outcomes, b',')?,
            OutputFormat::Tsv => format_as_delimited(&outcomes, b'\t')?,
        }

        Ok(())
    }
}

/// The guard name currently in the file, if any.
fn current_guard(outcome: &FileOutcome) -> Option<&str> {
    match &outcome.status {
        GuardStatus::Canonical => Some(outcome.identifier.as_str()),
        GuardStatus::Rewritten { previous } => Some(previous.as_str()),
        GuardStatus::Missing => None,
    }
}

/// Format outcomes as a human-readable table.
fn format_as_table(outcomes: &[FileOutcome]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for outcome in outcomes {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}",
            outcome.path.display(),
            outcome.identifier,
            outcome.status.label(),
            current_guard(outcome).unwrap_or("-"),
        )?;
    }

    Ok(())
}

/// Format outcomes as JSON.
fn format_as_json(outcomes: &[FileOutcome]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|o| {
            serde_json::json!({
                "path": o.path.display().to_string(),
                "guard": o.identifier,
                "status": o.status.label(),
                "current": current_guard(o),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format outcomes as delimited output (CSV or TSV).
fn format_as_delimited(outcomes: &[FileOutcome], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for outcome in outcomes {
        writer
            .write_record([
                outcome.path.display().to_string(),
                outcome.identifier.clone(),
                outcome.status.label().to_string(),
                current_guard(outcome).unwrap_or("").to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn outcome(status: GuardStatus) -> FileOutcome {
        FileOutcome {
            path: PathBuf::from("/proj/src/a.hpp"),
            identifier: "FRAMEWORK_A_HPP".to_string(),
            status,
            written: false,
        }
    }

    #[test]
    fn test_csv_error_is_io_failure() {
        let err = csv_error(csv::Error::from(std::io::Error::other("pipe closed")));
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 5);
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_current_guard() {
        assert_eq!(
            current_guard(&outcome(GuardStatus::Canonical)),
            Some("FRAMEWORK_A_HPP")
        );
        assert_eq!(
            current_guard(&outcome(GuardStatus::Rewritten {
                previous: "OLD".to_string()
            })),
            Some("OLD")
        );
        assert_eq!(current_guard(&outcome(GuardStatus::Missing)), None);
    }
}
