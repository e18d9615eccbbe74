//! # Diff Module
//!
//! This module contains functionality for rendering diffs between a file's
//! current content and the content it would get with a header stamped in.
//! It backs the `--diff`/`--save-diff` flags in check mode.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use similar::{ChangeTag, TextDiff};

use crate::output::display_path;

/// Renders pending-change diffs for check mode.
///
/// This struct handles:
/// - Generating diffs between current and would-be content
/// - Displaying diffs to stderr
/// - Appending diffs to a consolidated file
pub struct DiffPrinter {
  /// Whether to show diffs on stderr
  pub show_diff: bool,

  /// Path to append diffs to
  pub save_diff_path: Option<PathBuf>,
}

impl DiffPrinter {
  /// Creates a new DiffPrinter with the specified configuration.
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// True when this printer has anything to do.
  pub const fn is_active(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates the save file, if any, so a rerun starts from an empty diff.
  pub fn init(&self) -> Result<()> {
    if let Some(ref diff_path) = self.save_diff_path {
      File::create(diff_path).with_context(|| format!("Failed to create diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }

  /// Displays and/or saves a diff between the current and new content.
  ///
  /// Uses the `similar` crate to generate a line diff of the rewrite the
  /// file would receive. With `show_diff` the diff goes to stderr; with a
  /// `save_diff_path` it is appended there, so diffs from multiple files end
  /// up in one consolidated file.
  ///
  /// # Errors
  ///
  /// Fails when the save file cannot be opened or written.
  pub fn emit(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    let diff = TextDiff::from_lines(original, new);

    let mut diff_content = String::new();
    diff_content.push_str(&format!("Diff for {}:\n", display_path(path)));

    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      diff_content.push_str(&format!("{sign}{change}"));
    }
    diff_content.push('\n');

    if self.show_diff {
      eprint!("{diff_content}");
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file: {}", diff_path.display()))?;
      file
        .write_all(diff_content.as_bytes())
        .with_context(|| format!("Failed to write diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }
}
