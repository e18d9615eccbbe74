//! # Report Module
//!
//! Per-file outcomes and the aggregated counts for a run. These types feed
//! the summary line and the check-mode listing; there is deliberately no
//! machine-readable artifact behind them.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Outcome of processing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
  /// The second line already carries the marker; nothing was written
  AlreadyLicensed,
  /// The header was prepended and the file rewritten
  Added,
  /// The header is absent; reported but not written (check mode)
  Missing,
}

/// Everything a finished run knows about the files it covered.
#[derive(Debug)]
pub struct RunReport {
  outcomes: Vec<(PathBuf, FileOutcome)>,
  ignored: usize,
  elapsed: Duration,
}

impl RunReport {
  /// Bundles per-file outcomes with the scan's ignored count and timing.
  pub const fn new(outcomes: Vec<(PathBuf, FileOutcome)>, ignored: usize, elapsed: Duration) -> Self {
    Self {
      outcomes,
      ignored,
      elapsed,
    }
  }

  /// Per-file outcomes in processing order.
  pub fn outcomes(&self) -> &[(PathBuf, FileOutcome)] {
    &self.outcomes
  }

  /// Files found missing a header (check mode only produces these).
  pub fn missing_files(&self) -> Vec<&Path> {
    self
      .outcomes
      .iter()
      .filter(|(_, outcome)| *outcome == FileOutcome::Missing)
      .map(|(path, _)| path.as_path())
      .collect()
  }

  /// Aggregates the outcomes into summary counts.
  pub fn summary(&self) -> RunSummary {
    let mut summary = RunSummary {
      scanned: self.outcomes.len(),
      already_licensed: 0,
      added: 0,
      missing: 0,
      ignored: self.ignored,
      elapsed: self.elapsed,
    };

    for (_, outcome) in &self.outcomes {
      match outcome {
        FileOutcome::AlreadyLicensed => summary.already_licensed += 1,
        FileOutcome::Added => summary.added += 1,
        FileOutcome::Missing => summary.missing += 1,
      }
    }

    summary
  }
}

/// Aggregate counts for the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
  /// Files that went through the presence check
  pub scanned: usize,
  /// Files whose second line already carried the marker
  pub already_licensed: usize,
  /// Files rewritten with a fresh header
  pub added: usize,
  /// Files missing a header (check mode)
  pub missing: usize,
  /// Allow-listed files excluded by ignore patterns
  pub ignored: usize,
  /// Wall-clock processing time
  pub elapsed: Duration,
}
