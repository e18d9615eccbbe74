//! # Processor Module
//!
//! This module contains the core functionality: walking the scanned files and
//! ensuring every one of them starts with the header block.
//!
//! The module is organized around:
//! - [`file_io`] - File reading and atomic rewriting
//! - [`Applicator`] - the orchestrator mapping `ensure_header` over the scan
//!
//! Processing is strictly sequential: one file is read, optionally rewritten,
//! and released before the next is touched. The atomic rename inside
//! [`FileIO::write_atomic`] is the only concurrency-relevant guarantee.

pub mod file_io;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
pub use file_io::FileIO;
use tracing::{debug, trace};

use crate::detection::{HeaderDetector, MarkerLineDetector};
use crate::diff::DiffPrinter;
use crate::header::RenderedHeader;
use crate::info_log;
use crate::output::display_path;
use crate::processor::file_io::normalize_newlines;
use crate::report::{FileOutcome, RunReport};
use crate::scanner::{ExtensionFilter, IgnoreSet, ScanResult, Scanner};

/// Configuration for creating an Applicator instance.
pub struct ApplicatorConfig {
  /// Rendered header block to stamp into files
  pub header: RenderedHeader,

  // Behavior flags
  pub check_only: bool,

  // Optional components
  pub extensions: ExtensionFilter,
  pub ignore_patterns: Vec<String>,
  pub diff_printer: Option<DiffPrinter>,
  pub detector: Option<Box<dyn HeaderDetector>>,
}

impl ApplicatorConfig {
  /// Creates a new ApplicatorConfig with the required header and defaults
  /// everywhere else.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ApplicatorConfig {
  ///     check_only: true,
  ///     ..ApplicatorConfig::new(header)
  /// }
  /// ```
  pub fn new(header: RenderedHeader) -> Self {
    Self {
      header,
      check_only: false,
      extensions: ExtensionFilter::default(),
      ignore_patterns: vec![],
      diff_printer: None,
      detector: None,
    }
  }
}

/// Applies the header block across a source tree.
///
/// The `Applicator` is responsible for:
/// - Scanning the root directory for allow-listed files
/// - Deciding per file whether a header is already present
/// - Prepending the header and rewriting the file atomically
/// - Reporting what would change in check mode, optionally with diffs
pub struct Applicator {
  /// Rendered header block to stamp into files
  header: RenderedHeader,

  /// Discovery of candidate files
  scanner: Scanner,

  /// Whether to report missing headers without modifying files
  check_only: bool,

  /// Renderer for pending-change diffs in check mode
  diff_printer: DiffPrinter,

  /// Detector deciding whether content already carries a header
  detector: Box<dyn HeaderDetector>,
}

impl Applicator {
  /// Creates a new applicator with the specified configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if any of the ignore patterns are invalid.
  pub fn new(config: ApplicatorConfig) -> Result<Self> {
    let ignore = IgnoreSet::new(&config.ignore_patterns)?;
    let scanner = Scanner::new(config.extensions, ignore);
    let diff_printer = config.diff_printer.unwrap_or_else(|| DiffPrinter::new(false, None));
    let detector = config.detector.unwrap_or_else(|| Box::new(MarkerLineDetector::new()));

    Ok(Self {
      header: config.header,
      scanner,
      check_only: config.check_only,
      diff_printer,
      detector,
    })
  }

  /// Discovers the files to process under `root` without touching any file
  /// content.
  pub fn scan(&self, root: &Path) -> Result<ScanResult> {
    self.scanner.scan(root)
  }

  /// Runs `ensure_header` over an already-computed scan, one file at a time.
  ///
  /// The first per-file error aborts the run; files processed before it keep
  /// their new headers, which is safe because the operation is idempotent.
  pub fn process(&self, scan: ScanResult) -> Result<RunReport> {
    let started = Instant::now();
    debug!("Processing {} files", scan.files.len());

    let mut outcomes = Vec::with_capacity(scan.files.len());
    for path in scan.files {
      let outcome = self.ensure_header(&path)?;
      outcomes.push((path, outcome));
    }

    Ok(RunReport::new(outcomes, scan.ignored, started.elapsed()))
  }

  /// Scans `root` and processes the result in one call.
  pub fn run(&self, root: &Path) -> Result<RunReport> {
    let scan = self.scan(root)?;
    self.process(scan)
  }

  /// Ensures a single file starts with the header block.
  ///
  /// Reads the file, asks the detector whether a header is already present,
  /// and if not either reports it (check mode) or rewrites the file as
  /// header plus unchanged body via an atomic replace.
  fn ensure_header(&self, path: &Path) -> Result<FileOutcome> {
    let content = FileIO::read_full_content(path)?;

    if self.detector.is_licensed(&content) {
      trace!("Already licensed: {}", path.display());
      return Ok(FileOutcome::AlreadyLicensed);
    }

    let rewritten = self.stamped_content(&content);

    if self.check_only {
      trace!("Missing header: {}", path.display());
      if self.diff_printer.is_active() {
        self.diff_printer.emit(path, &content, &rewritten)?;
      }
      return Ok(FileOutcome::Missing);
    }

    FileIO::write_atomic(path, &rewritten)?;
    info_log!("Applying license to: {}", display_path(path));
    Ok(FileOutcome::Added)
  }

  /// Builds the rewrite: header block followed by the newline-normalized
  /// original content, with nothing else touched.
  fn stamped_content(&self, original: &str) -> String {
    let body = normalize_newlines(original);
    let mut rewritten = String::with_capacity(self.header.text().len() + body.len());
    rewritten.push_str(self.header.text());
    rewritten.push_str(&body);
    rewritten
  }
}
