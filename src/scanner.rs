//! # Scanner Module
//!
//! Discovery of candidate files: a recursive walk of the scan root filtered
//! by an extension allow-list and optional exclusion globs. The scanner never
//! opens a file; it only looks at paths and file types, so anything outside
//! the allow-list is untouched by construction.
//!
//! Entries are visited in sorted order to keep runs deterministic.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::verbose_log;

/// Extensions scanned when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["scala", "java"];

/// Case-insensitive extension allow-list.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
  /// Allowed extensions, lowercased, without leading dots
  allowed: Vec<String>,
}

impl Default for ExtensionFilter {
  fn default() -> Self {
    Self::new(DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()))
  }
}

impl ExtensionFilter {
  /// Builds a filter from the given extensions.
  ///
  /// Extensions are normalized to lowercase and any leading dot is stripped,
  /// so `".Java"` and `"java"` configure the same filter.
  pub fn new(extensions: impl IntoIterator<Item = String>) -> Self {
    let allowed = extensions
      .into_iter()
      .map(|ext| ext.trim_start_matches('.').to_lowercase())
      .filter(|ext| !ext.is_empty())
      .collect();
    Self { allowed }
  }

  /// Checks whether the path's extension is in the allow-list.
  ///
  /// The comparison is case-insensitive; files without an extension never
  /// match.
  pub fn matches(&self, path: &Path) -> bool {
    path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| self.allowed.iter().any(|allowed| allowed == &ext.to_lowercase()))
  }
}

/// Pre-compiled exclusion globs.
///
/// Bare names and directory patterns are expanded so they match anywhere in
/// the tree; explicit glob patterns additionally get a `**/` prefix so they
/// apply regardless of where the scan root sits.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
  glob_set: GlobSet,
}

impl IgnoreSet {
  /// Compiles the given patterns into a match set.
  ///
  /// # Errors
  ///
  /// Returns an error naming the offending pattern if any glob fails to
  /// compile.
  pub fn new(patterns: &[String]) -> Result<Self> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
      // Normalize pattern: convert backslashes to forward slashes
      let pattern = pattern.replace('\\', "/");

      let add_pattern = |b: &mut GlobSetBuilder, p: &str| -> Result<()> {
        b.add(Glob::new(p).with_context(|| format!("Invalid ignore pattern: {p}"))?);
        Ok(())
      };

      if let Some(dir_pattern) = pattern.strip_suffix('/') {
        // Directory pattern: match the directory itself and everything below it
        add_pattern(&mut builder, dir_pattern)?;
        add_pattern(&mut builder, &format!("{dir_pattern}/**"))?;
        add_pattern(&mut builder, &format!("**/{dir_pattern}/**"))?;
        add_pattern(&mut builder, &format!("**/{dir_pattern}"))?;
      } else if !pattern.contains('*') && !pattern.contains('?') {
        // Plain name without wildcards - treat as potential directory or file match
        add_pattern(&mut builder, &pattern)?;
        add_pattern(&mut builder, &format!("**/{pattern}"))?;
        add_pattern(&mut builder, &format!("{pattern}/**"))?;
        add_pattern(&mut builder, &format!("**/{pattern}/**"))?;
      } else {
        add_pattern(&mut builder, &pattern)?;

        // Also match the pattern anywhere below the scan root
        if !pattern.starts_with("**/") {
          add_pattern(&mut builder, &format!("**/{pattern}"))?;
        }
      }
    }

    let glob_set = builder.build().with_context(|| "Failed to build ignore glob set")?;
    Ok(Self { glob_set })
  }

  /// An ignore set that excludes nothing.
  pub fn empty() -> Self {
    Self {
      glob_set: GlobSet::empty(),
    }
  }

  /// Checks whether the path matches any exclusion pattern.
  pub fn is_ignored(&self, path: &Path) -> bool {
    self.glob_set.is_match(path)
  }
}

/// Outcome of a scan: the files to process plus the number of allow-listed
/// files the exclusion globs removed.
#[derive(Debug)]
pub struct ScanResult {
  /// Files to process, in sorted traversal order
  pub files: Vec<PathBuf>,
  /// Allow-listed files excluded by ignore patterns
  pub ignored: usize,
}

/// Walks a root directory and produces the set of files to process.
pub struct Scanner {
  extensions: ExtensionFilter,
  ignore: IgnoreSet,
}

impl Scanner {
  /// Creates a scanner with the given filters.
  pub const fn new(extensions: ExtensionFilter, ignore: IgnoreSet) -> Self {
    Self { extensions, ignore }
  }

  /// Recursively enumerates matching files under `root`.
  ///
  /// Symlinks are not followed; non-files (directories, symlinked files) are
  /// skipped. Entries are visited in file-name order so the result is
  /// deterministic across runs.
  ///
  /// # Errors
  ///
  /// Fails when `root` is not an existing directory or when a directory
  /// entry cannot be read during the walk.
  pub fn scan(&self, root: &Path) -> Result<ScanResult> {
    if !root.is_dir() {
      bail!("Scan root is not a directory: {}", root.display());
    }

    let mut files = Vec::new();
    let mut ignored = 0usize;

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
      let entry = entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
      if !entry.file_type().is_file() {
        continue;
      }

      let path = entry.into_path();
      if !self.extensions.matches(&path) {
        continue;
      }
      if self.ignore.is_ignored(&path) {
        verbose_log!("Skipping: {} (matches ignore pattern)", path.display());
        ignored += 1;
        continue;
      }

      files.push(path);
    }

    Ok(ScanResult { files, ignored })
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, "object X\n").expect("write file");
  }

  #[test]
  fn test_extension_filter_case_insensitive() {
    let filter = ExtensionFilter::default();

    assert!(filter.matches(Path::new("src/Main.scala")));
    assert!(filter.matches(Path::new("src/Main.SCALA")));
    assert!(filter.matches(Path::new("src/Main.Java")));
    assert!(!filter.matches(Path::new("src/Main.rs")));
    assert!(!filter.matches(Path::new("src/README")));
  }

  #[test]
  fn test_extension_filter_strips_dots_and_empty_entries() {
    let filter = ExtensionFilter::new(vec![".Kt".to_string(), String::new()]);

    assert!(filter.matches(Path::new("a/B.kt")));
    assert!(!filter.matches(Path::new("a/B")));
  }

  #[test]
  fn test_ignore_set_bare_name_matches_anywhere() {
    let set = IgnoreSet::new(&["generated".to_string()]).expect("valid pattern");

    assert!(set.is_ignored(Path::new("src/generated/Model.scala")));
    assert!(set.is_ignored(Path::new("generated/Model.scala")));
    assert!(!set.is_ignored(Path::new("src/main/Model.scala")));
  }

  #[test]
  fn test_ignore_set_directory_pattern() {
    let set = IgnoreSet::new(&["target/".to_string()]).expect("valid pattern");

    assert!(set.is_ignored(Path::new("src/target/Foo.java")));
    assert!(!set.is_ignored(Path::new("src/targets/Foo.java")));
  }

  #[test]
  fn test_ignore_set_wildcard_pattern() {
    let set = IgnoreSet::new(&["*Spec.scala".to_string()]).expect("valid pattern");

    assert!(set.is_ignored(Path::new("src/test/scala/FooSpec.scala")));
    assert!(!set.is_ignored(Path::new("src/test/scala/Foo.scala")));
  }

  #[test]
  fn test_ignore_set_invalid_pattern() {
    let err = IgnoreSet::new(&["a[".to_string()]).unwrap_err();
    assert!(err.to_string().contains("Invalid ignore pattern"));
  }

  #[test]
  fn test_scan_collects_only_allowed_extensions() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();

    touch(&root.join("main/scala/A.scala"));
    touch(&root.join("main/java/B.java"));
    touch(&root.join("main/resources/notes.txt"));
    touch(&root.join("Build.SCALA"));

    let scanner = Scanner::new(ExtensionFilter::default(), IgnoreSet::empty());
    let result = scanner.scan(root).expect("scan succeeds");

    let mut names: Vec<_> = result
      .files
      .iter()
      .map(|p| p.file_name().and_then(|n| n.to_str()).unwrap_or("").to_string())
      .collect();
    names.sort();

    assert_eq!(names, vec!["A.scala", "B.java", "Build.SCALA"]);
    assert_eq!(result.ignored, 0);
  }

  #[test]
  fn test_scan_counts_ignored_files() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();

    touch(&root.join("main/A.scala"));
    touch(&root.join("generated/B.scala"));
    touch(&root.join("generated/C.java"));

    let ignore = IgnoreSet::new(&["generated".to_string()]).expect("valid pattern");
    let scanner = Scanner::new(ExtensionFilter::default(), ignore);
    let result = scanner.scan(root).expect("scan succeeds");

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.ignored, 2);
  }

  #[test]
  fn test_scan_order_is_sorted() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();

    touch(&root.join("b.scala"));
    touch(&root.join("a.scala"));
    touch(&root.join("c.scala"));

    let scanner = Scanner::new(ExtensionFilter::default(), IgnoreSet::empty());
    let result = scanner.scan(root).expect("scan succeeds");

    let names: Vec<_> = result
      .files
      .iter()
      .map(|p| p.file_name().and_then(|n| n.to_str()).unwrap_or("").to_string())
      .collect();

    assert_eq!(names, vec!["a.scala", "b.scala", "c.scala"]);
  }

  #[test]
  fn test_scan_missing_root_fails() {
    let scanner = Scanner::new(ExtensionFilter::default(), IgnoreSet::empty());
    let err = scanner.scan(Path::new("/no/such/root")).unwrap_err();

    assert!(err.to_string().contains("Scan root is not a directory"));
  }
}
