//! Console output and styling.
//!
//! Log lines go through `tracing`; this module only prints the closing
//! summary that a user reads at the end of a run.

use crate::cli::RunReport;
use colored::*;

/// Prints run summaries with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Turns colored output on or off for the rest of the process.
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints a simulate-mode notice.
    pub fn simulate_notice(message: &str) {
        println!("{}", format!("[SIMULATE] {}", message).yellow());
    }

    /// Prints the closing summary for a run.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use magrename::cli::RunReport;
    /// use magrename::output::OutputFormatter;
    ///
    /// let report = RunReport::default();
    /// OutputFormatter::summary(&report, false);
    /// ```
    pub fn summary(report: &RunReport, simulate: bool) {
        Self::header("SUMMARY");

        let rows = if simulate {
            [
                ("Would rename", report.simulated),
                ("Skipped", report.skipped),
                ("Failed", report.failures.len()),
            ]
        } else {
            [
                ("Renamed", report.renamed),
                ("Skipped", report.skipped),
                ("Failed", report.failures.len()),
            ]
        };

        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, count) in rows {
            let count_text = if label == "Failed" && count > 0 {
                count.to_string().red().bold()
            } else {
                count.to_string().green()
            };
            println!(
                "{:<width$} | {} {}",
                label,
                count_text,
                if count == 1 { "file" } else { "files" },
                width = width
            );
        }

        for (path, reason) in &report.failures {
            Self::error(&format!("{}: {}", path.display(), reason));
        }

        if simulate {
            Self::simulate_notice("No files were modified.");
        } else if report.failures.is_empty() {
            Self::success("Done.");
        }
    }
}
