//! Command-line interface module for magrename.
//!
//! This module handles all CLI-related functionality including:
//! - Argument parsing
//! - Configuration and logging setup
//! - The per-file rename loop
//! - The closing summary

use crate::config::{RenamerConfig, parse_level};
use crate::error::StartupError;
use crate::file_renamer::{FileRenamer, RenamePlan};
use crate::output::OutputFormatter;
use crate::shape::ShapeClassifier;
use clap::{ArgAction, Parser};
use std::fmt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber, debug, error, info};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Rename IEEE magazine PDF files into a single normalized naming scheme.
#[derive(Debug, Clone, Parser)]
#[command(name = "magrename", version, about)]
pub struct Args {
    /// File(s) to be renamed.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Do not actually rename the files, only show what would happen.
    #[arg(short, long)]
    pub simulate: bool,

    /// Print more detail about the process. Repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print anything to the console (overrides verbose).
    #[arg(short, long)]
    pub quiet: bool,

    /// Read settings from this TOML file instead of the default locations.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Options that change how the batch is processed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Compute and log renames without touching the filesystem.
    pub simulate: bool,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Files renamed on disk.
    pub renamed: usize,
    /// Files that would have been renamed in simulate mode.
    pub simulated: usize,
    /// Paths left alone: not files or unrecognized names.
    pub skipped: usize,
    /// Paths whose rename failed, with the reason.
    pub failures: Vec<(PathBuf, String)>,
}

impl RunReport {
    /// Total number of paths processed.
    pub fn total(&self) -> usize {
        self.renamed + self.simulated + self.skipped + self.failures.len()
    }
}

/// Picks the log level from the command-line flags.
///
/// `--quiet` wins over everything. Without `-v` the configured level is
/// used; `-v` means info, `-vv` debug and `-vvv` or more trace.
pub fn resolve_level(verbose: u8, quiet: bool, configured: LevelFilter) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbose {
        0 => configured,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Event format that writes `LEVEL: message` lines with no timestamp or target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelPrefixFormat;

impl<S, N> FormatEvent<S, N> for LevelPrefixFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{}: ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global `tracing` subscriber.
///
/// Lines look like `INFO: message`. When `log_file` is set, lines are
/// appended there instead of stderr.
///
/// # Errors
///
/// Returns [`StartupError::LogFile`] if the log file cannot be opened and
/// [`StartupError::Logging`] if a global subscriber is already installed.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), StartupError> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .event_format(LevelPrefixFormat);

    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| StartupError::LogFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            builder.with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| StartupError::Logging(e.to_string()))
}

/// Processes every path in order. A failure on one path never stops the rest.
///
/// # Examples
///
/// ```no_run
/// use magrename::cli::{RunOptions, run_batch};
/// use std::path::PathBuf;
///
/// let files = vec![PathBuf::from("Spectrum_12345_Mar_2020.PDF")];
/// let report = run_batch(&files, &RunOptions { simulate: true });
/// println!("{} file(s) would be renamed", report.simulated);
/// ```
pub fn run_batch(files: &[PathBuf], options: &RunOptions) -> RunReport {
    debug!("Files to rename are: {:?}", files);
    debug!("Total file count: {}", files.len());
    debug!("Simulation state is {}", options.simulate);

    let classifier = ShapeClassifier::new();
    let mut report = RunReport::default();

    for path in files {
        let plan = match FileRenamer::plan(path, &classifier) {
            Ok(plan) => plan,
            Err(e) => {
                error!("{}", e);
                report.failures.push((path.clone(), e.to_string()));
                continue;
            }
        };

        match &plan {
            RenamePlan::Skip { .. } => report.skipped += 1,
            RenamePlan::Rename { source, target, .. } if options.simulate => {
                info!(
                    "Simulation: {} would be renamed to {}.",
                    source.display(),
                    target.display()
                );
                report.simulated += 1;
            }
            RenamePlan::Rename { .. } => match FileRenamer::apply(&plan) {
                Ok(()) => report.renamed += 1,
                Err(e) => {
                    error!("{}", e);
                    report.failures.push((path.clone(), e.to_string()));
                }
            },
        }
    }

    report
}

/// Runs the whole program for parsed arguments.
///
/// # Errors
///
/// Returns a [`StartupError`] if configuration or logging cannot be set up.
/// Per-file problems are recorded in the returned report instead.
pub fn run_cli(args: &Args) -> Result<RunReport, StartupError> {
    let config = RenamerConfig::load(args.config.as_deref())?;
    let configured = parse_level(&config.logging.level)?;
    let level = resolve_level(args.verbose, args.quiet, configured);

    init_logging(level, config.logging.file.as_deref())?;
    debug!("Logger setup completed.");
    debug!("magrename {} is starting.", env!("CARGO_PKG_VERSION"));

    let options = RunOptions {
        simulate: args.simulate,
    };
    let report = run_batch(&args.files, &options);

    if !args.quiet {
        OutputFormatter::set_color(config.output.color);
        OutputFormatter::summary(&report, options.simulate);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from(["magrename", "-s", "-vv", "a.pdf", "b.pdf"]).unwrap();
        assert!(args.simulate);
        assert_eq!(args.verbose, 2);
        assert!(!args.quiet);
        assert_eq!(
            args.files,
            vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]
        );
    }

    #[test]
    fn test_files_are_required() {
        assert!(Args::try_parse_from(["magrename"]).is_err());
        assert!(Args::try_parse_from(["magrename", "-s"]).is_err());
    }

    #[test]
    fn test_quiet_and_verbose_together() {
        let args = Args::try_parse_from(["magrename", "-q", "-v", "a.pdf"]).unwrap();
        assert_eq!(
            resolve_level(args.verbose, args.quiet, LevelFilter::INFO),
            LevelFilter::OFF
        );
    }

    #[test]
    fn test_resolve_level() {
        assert_eq!(resolve_level(0, false, LevelFilter::WARN), LevelFilter::WARN);
        assert_eq!(resolve_level(1, false, LevelFilter::WARN), LevelFilter::INFO);
        assert_eq!(resolve_level(2, false, LevelFilter::WARN), LevelFilter::DEBUG);
        assert_eq!(resolve_level(5, false, LevelFilter::WARN), LevelFilter::TRACE);
        assert_eq!(resolve_level(0, true, LevelFilter::DEBUG), LevelFilter::OFF);
    }

    #[test]
    fn test_log_lines_have_level_prefix() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join("run.log");
        let file = std::fs::File::create(&log_path).expect("Failed to create log file");

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_ansi(false)
            .event_format(LevelPrefixFormat)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            info!("File will be renamed to '{}'.", "IEEE Spectrum 2020-03.pdf");
            debug!("Year is {}.", 2020);
        });

        let log = std::fs::read_to_string(&log_path).expect("Failed to read log file");
        assert_eq!(
            log,
            "INFO: File will be renamed to 'IEEE Spectrum 2020-03.pdf'.\nDEBUG: Year is 2020.\n"
        );
    }

    #[test]
    fn test_report_total() {
        let report = RunReport {
            renamed: 2,
            simulated: 0,
            skipped: 3,
            failures: vec![(PathBuf::from("x.pdf"), "boom".to_string())],
        };
        assert_eq!(report.total(), 6);
    }
}
