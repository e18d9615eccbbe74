//! # Header Detection Module
//!
//! This module contains the interface and implementation for deciding whether
//! a file already carries a license header. It allows the detection rule to be
//! swapped without modifying the processor.

use crate::header::HEADER_MARKER;

/// Trait for header detectors.
///
/// Implementations of this trait are responsible for determining whether a
/// file already contains a license header based on its content.
pub trait HeaderDetector: Send + Sync {
  /// Checks if the content already has a license header.
  ///
  /// # Parameters
  ///
  /// * `content` - The file content to check
  ///
  /// # Returns
  ///
  /// `true` if the content appears to have a license header, `false` otherwise.
  fn is_licensed(&self, content: &str) -> bool;
}

/// Default implementation of header detection.
///
/// A file counts as licensed when its second line (line index 1) contains the
/// word `Copyright`. Every header this tool stamps puts the copyright notice
/// on that line, so a stamped file is always recognized on the next run.
///
/// Files with fewer than two lines cannot satisfy the check and are treated
/// as unlicensed.
pub struct MarkerLineDetector;

impl MarkerLineDetector {
  /// Creates a new MarkerLineDetector.
  pub const fn new() -> Self {
    MarkerLineDetector
  }
}

impl Default for MarkerLineDetector {
  fn default() -> Self {
    Self::new()
  }
}

impl HeaderDetector for MarkerLineDetector {
  fn is_licensed(&self, content: &str) -> bool {
    content.lines().nth(1).is_some_and(|line| line.contains(HEADER_MARKER))
  }
}
