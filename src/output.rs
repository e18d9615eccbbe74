//! # Output Module
//!
//! This module centralizes all user-facing output for the applicense tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! ## Design Goals
//!
//! - **Informative**: Show actionable information without requiring flags
//! - **Scannable**: Use formatting to make output easy to parse visually
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: Keep stdout predictable for piping/automation

use std::path::{Path, PathBuf};

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::RunSummary;

/// Symbols used in output
pub mod symbols {
  /// Success/has license
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing license/failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print the initial "Checking N files..." or "Processing N files..." message.
///
/// - In modify mode: "Processing N files..."
/// - In check mode: "Checking N files..."
pub fn print_start_message(file_count: usize, modify_mode: bool) {
  if is_quiet() {
    return;
  }

  let verb = if modify_mode { "Processing" } else { "Checking" };
  let files_word = if file_count == 1 { "file" } else { "files" };

  println!("{} {} {}...", verb, file_count, files_word);
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of files missing license headers.
///
/// Shows up to `DEFAULT_FILE_LIST_LIMIT` files; verbose mode shows all.
/// Files are sorted alphabetically by path. In quiet mode the bare paths are
/// printed without decoration so the output stays scriptable.
pub fn print_missing_files(files: &[&Path]) {
  if files.is_empty() {
    return;
  }

  let mut sorted_files: Vec<_> = files.to_vec();
  sorted_files.sort();

  if is_quiet() {
    for file in &sorted_files {
      println!("{}", display_path(file));
    }
    return;
  }

  let count = sorted_files.len();
  println!(
    "{} {} {} missing license headers:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    count,
    if count == 1 { "file" } else { "files" }
  );

  let show_all = is_verbose();
  let effective_limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in sorted_files.iter().take(effective_limit) {
    println!("  {}", display_path(file));
  }

  if !show_all && count > effective_limit {
    let remaining = count - effective_limit;
    println!("  ... and {remaining} more (use -v to see all)");
  }
}

/// Print the success message when all files have license headers.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have license headers.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the run summary.
///
/// Format: "Summary: X OK, Y added, Z ignored" in modify mode and
/// "Summary: X OK, Y missing, Z ignored" in check mode. Verbose mode appends
/// the elapsed time.
pub fn print_summary(summary: &RunSummary, modify_mode: bool) {
  if is_quiet() {
    return;
  }

  let ok_str = summary
    .already_licensed
    .if_supports_color(Stream::Stdout, |s| s.cyan())
    .to_string();

  let mut summary_line = if modify_mode {
    let added_str = if summary.added > 0 {
      summary.added.if_supports_color(Stream::Stdout, |s| s.green()).to_string()
    } else {
      summary.added.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
    };
    format!("Summary: {} OK, {} added", ok_str, added_str)
  } else {
    let missing_str = if summary.missing > 0 {
      summary.missing.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    } else {
      summary.missing.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
    };
    format!("Summary: {} OK, {} missing", ok_str, missing_str)
  };

  summary_line.push_str(&format!(
    ", {} ignored",
    summary.ignored.if_supports_color(Stream::Stdout, |s| s.dimmed())
  ));

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.elapsed.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Formats a path for display, relative to the current directory when
/// possible.
pub fn display_path(path: &Path) -> String {
  let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
  normalize_relative_path(path, &current_dir).display().to_string()
}

/// Normalizes a path to be relative to a given directory.
///
/// Absolute paths under `current_dir` are stripped to the relative remainder;
/// other absolute paths fall back to a `..`-style relative form. Relative
/// paths just lose any `./` components.
pub fn normalize_relative_path(path: &Path, current_dir: &Path) -> PathBuf {
  if path.is_absolute() {
    if let Ok(stripped) = path.strip_prefix(current_dir) {
      return stripped.to_path_buf();
    }

    if let Some(rel_path) = pathdiff::diff_paths(path, current_dir) {
      return rel_path;
    }
  }

  let mut normalized = PathBuf::new();
  for component in path.components() {
    if matches!(component, std::path::Component::CurDir) {
      continue;
    }
    normalized.push(component.as_os_str());
  }

  if normalized.as_os_str().is_empty() {
    PathBuf::from(".")
  } else {
    normalized
  }
}
