//! # File I/O Module
//!
//! This module provides the file reading and rewriting utilities for the
//! processor. Reads are plain synchronous reads; rewrites go through a
//! temporary file in the target's directory followed by an atomic rename, so
//! an interrupted run never leaves a half-written source file behind.

use std::borrow::Cow;
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and rewriting files.
pub struct FileIO;

impl FileIO {
  /// Reads full file content.
  ///
  /// # Errors
  ///
  /// Fails when the file cannot be opened or is not valid UTF-8; the error
  /// carries the file path.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Replaces `path` with `content` atomically.
  ///
  /// The content is written to a temporary file in the same directory (same
  /// filesystem, so the final rename cannot degrade into a copy), the
  /// original's permission bits are carried over, and the temporary file is
  /// renamed onto the target. The original file stays intact until the
  /// rename; on any failure the temporary file is cleaned up by its guard.
  pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
      .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
    tmp
      .write_all(content.as_bytes())
      .with_context(|| format!("Failed to write temporary file for: {}", path.display()))?;

    // Keep the original file mode across the rename; tempfiles are created 0600.
    if let Ok(metadata) = std::fs::metadata(path) {
      let _ = tmp.as_file().set_permissions(metadata.permissions());
    }

    tmp
      .persist(path)
      .map_err(|e| e.error)
      .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
  }
}

/// Normalizes line endings to LF.
///
/// `\r\n` pairs and bare `\r` both become `\n`; everything else, including
/// the presence or absence of a trailing newline, is preserved. Returns the
/// input unchanged (without allocating) when it contains no `\r`.
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
  if !content.contains('\r') {
    return Cow::Borrowed(content);
  }
  Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn test_normalize_newlines_borrows_clean_input() {
    let content = "line one\nline two\n";
    assert!(matches!(normalize_newlines(content), Cow::Borrowed(_)));
  }

  #[test]
  fn test_normalize_newlines_crlf_and_bare_cr() {
    assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
    assert_eq!(normalize_newlines("a\r\n"), "a\n");
    assert_eq!(normalize_newlines("no trailing"), "no trailing");
  }

  #[test]
  fn test_write_atomic_replaces_content() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("Main.scala");
    fs::write(&path, "old content\n").expect("write original");

    FileIO::write_atomic(&path, "new content\n").expect("atomic write");

    assert_eq!(fs::read_to_string(&path).expect("read back"), "new content\n");
  }

  #[test]
  fn test_write_atomic_leaves_no_temp_files() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("Main.scala");
    fs::write(&path, "old\n").expect("write original");

    FileIO::write_atomic(&path, "new\n").expect("atomic write");

    let entries: Vec<_> = fs::read_dir(dir.path())
      .expect("read dir")
      .filter_map(|e| e.ok())
      .map(|e| e.file_name())
      .collect();
    assert_eq!(entries.len(), 1);
  }

  #[cfg(unix)]
  #[test]
  fn test_write_atomic_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("script.scala");
    fs::write(&path, "old\n").expect("write original");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");

    FileIO::write_atomic(&path, "new\n").expect("atomic write");

    let mode = fs::metadata(&path).expect("stat").permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
  }

  #[test]
  fn test_read_full_content_missing_file() {
    let err = FileIO::read_full_content(Path::new("/no/such/file.scala")).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
  }
}
