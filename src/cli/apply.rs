//! # Apply Command
//!
//! This module implements the apply/check command for license headers.
//! This is the default command when no subcommand is specified.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::{DEFAULT_ROOT, load_config};
use crate::diff::DiffPrinter;
use crate::header::{HeaderData, HeaderTemplate};
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  print_all_files_ok, print_blank_line, print_hint, print_missing_files, print_start_message, print_summary,
};
use crate::processor::{Applicator, ApplicatorConfig};
use crate::scanner::{DEFAULT_EXTENSIONS, ExtensionFilter};

/// Arguments for the apply command
#[derive(Args, Debug, Default)]
pub struct ApplyArgs {
  /// Root directory to scan recursively
  #[arg(value_name = "ROOT")]
  pub root: Option<PathBuf>,

  /// Check mode: report files missing a header without modifying anything
  #[arg(long, short = 'c')]
  pub check: bool,

  /// Show a diff of pending changes in check mode
  #[arg(long, requires = "check")]
  pub diff: bool,

  /// Save a diff of pending changes to a file in check mode
  #[arg(long, short = 'o', value_name = "FILE", requires = "check")]
  pub save_diff: Option<PathBuf>,

  /// Custom header template file; {{year}} is replaced with the configured
  /// year
  #[arg(long, short = 't', value_name = "FILE")]
  pub header_file: Option<PathBuf>,

  /// Copyright year(s)
  #[arg(long, value_name = "YEAR")]
  pub year: Option<String>,

  /// Only process files with these extensions (repeatable, case-insensitive)
  #[arg(long = "ext", short = 'e', value_name = "EXT")]
  pub extensions: Vec<String>,

  /// File patterns to ignore (supports glob patterns)
  #[arg(long, short = 'i', value_name = "PATTERN")]
  pub ignore: Vec<String>,

  /// Path to config file (default: .applicense.toml in the current directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the apply command with the given arguments
pub fn run_apply(args: ApplyArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().context("Failed to determine current directory")?;

  // Load configuration file if present
  let config = load_config(args.config.as_deref(), &current_dir, args.no_config)?;

  if config.is_some() {
    debug!("Using configuration file");
  }

  // Resolve settings: CLI flags win over config values, defaults fill the rest
  let root = args
    .root
    .or_else(|| config.as_ref().and_then(|c| c.root.clone()))
    .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

  let extensions = if args.extensions.is_empty() {
    config
      .as_ref()
      .and_then(|c| c.extensions.clone())
      .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect())
  } else {
    args.extensions
  };

  let ignore_patterns = if args.ignore.is_empty() {
    config.as_ref().map(|c| c.ignore.clone()).unwrap_or_default()
  } else {
    args.ignore
  };

  let header_file = args
    .header_file
    .or_else(|| config.as_ref().and_then(|c| c.header_file.clone()));

  let header_data = match args.year.or_else(|| config.as_ref().and_then(|c| c.year.clone())) {
    Some(year) => HeaderData { year },
    None => HeaderData::current_year(),
  };

  let template = match header_file {
    Some(ref path) => HeaderTemplate::from_file(path)?,
    None => HeaderTemplate::builtin(),
  };
  let header = template.render(&header_data)?;

  let diff_printer = DiffPrinter::new(args.diff, args.save_diff);
  diff_printer.init()?;

  let applicator_config = ApplicatorConfig {
    check_only: args.check,
    extensions: ExtensionFilter::new(extensions),
    ignore_patterns,
    diff_printer: diff_printer.is_active().then_some(diff_printer),
    ..ApplicatorConfig::new(header)
  };
  let applicator = Applicator::new(applicator_config)?;

  // Scan up front so the start message can carry the file count
  let scan = applicator.scan(&root)?;
  print_start_message(scan.files.len(), !args.check);

  // Short-circuit if no files to process
  if scan.files.is_empty() {
    print_blank_line();
    print_all_files_ok();
    return Ok(());
  }

  let report = applicator.process(scan)?;
  let summary = report.summary();

  print_blank_line();

  if args.check {
    let missing = report.missing_files();
    if missing.is_empty() {
      print_all_files_ok();
    } else {
      print_missing_files(&missing);
    }

    print_blank_line();
    print_summary(&summary, false);

    // Exit with non-zero code if in check mode and headers are missing
    if !missing.is_empty() {
      print_blank_line();
      print_hint("Run without --check to add the missing headers.");
      process::exit(1);
    }
  } else {
    // Per-file "Applying license to" lines were already printed while
    // processing; only show the success banner when nothing needed a header
    if summary.added == 0 {
      print_all_files_ok();
      print_blank_line();
    }
    print_summary(&summary, true);
  }

  Ok(())
}
