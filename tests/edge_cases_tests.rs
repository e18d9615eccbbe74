use std::fs;
use std::path::Path;

use anyhow::Result;
use applicense::header::{DEFAULT_HEADER, HeaderData, HeaderError, HeaderTemplate};
use applicense::processor::{Applicator, ApplicatorConfig};
use tempfile::tempdir;

mod common;

fn builtin_applicator(check_only: bool) -> Result<Applicator> {
  let header = HeaderTemplate::builtin().render(&HeaderData::current_year())?;
  Applicator::new(ApplicatorConfig {
    check_only,
    ..ApplicatorConfig::new(header)
  })
}

#[test]
fn test_empty_file_becomes_header_alone() -> Result<()> {
  let temp_dir = tempdir()?;
  let file = common::write_file(temp_dir.path(), "src/Empty.scala", "")?;

  let applicator = builtin_applicator(false)?;
  let report = applicator.run(&temp_dir.path().join("src"))?;

  assert_eq!(report.summary().added, 1);
  assert_eq!(fs::read_to_string(&file)?, DEFAULT_HEADER);

  Ok(())
}

#[test]
fn test_one_line_file_gets_header() -> Result<()> {
  let temp_dir = tempdir()?;

  // Too short for the second-line check, so it counts as unlicensed
  let file = common::write_file(temp_dir.path(), "src/One.scala", "object One\n")?;

  let applicator = builtin_applicator(false)?;
  applicator.run(&temp_dir.path().join("src"))?;
  let after_first = fs::read_to_string(&file)?;
  assert_eq!(after_first, format!("{DEFAULT_HEADER}object One\n"));

  // Once stamped, the file is in range for the check and stays stable
  applicator.run(&temp_dir.path().join("src"))?;
  assert_eq!(fs::read_to_string(&file)?, after_first);

  Ok(())
}

#[test]
fn test_one_line_copyright_file_still_gets_header() -> Result<()> {
  let temp_dir = tempdir()?;
  let file = common::write_file(temp_dir.path(), "src/Short.scala", "// Copyright 2020\n")?;

  let applicator = builtin_applicator(false)?;
  let report = applicator.run(&temp_dir.path().join("src"))?;

  assert_eq!(report.summary().added, 1);
  assert!(fs::read_to_string(&file)?.starts_with(DEFAULT_HEADER));

  Ok(())
}

#[test]
fn test_file_without_trailing_newline_keeps_its_shape() -> Result<()> {
  let temp_dir = tempdir()?;
  let file = common::write_file(temp_dir.path(), "src/NoNewline.scala", "object NoNewline")?;

  let applicator = builtin_applicator(false)?;
  applicator.run(&temp_dir.path().join("src"))?;

  let content = fs::read_to_string(&file)?;
  assert!(content.ends_with("object NoNewline"));
  assert!(!content.ends_with('\n'));

  Ok(())
}

#[test]
fn test_bom_content_is_preserved() -> Result<()> {
  let temp_dir = tempdir()?;
  let original = "\u{FEFF}object Bom\n";
  let file = common::write_file(temp_dir.path(), "src/Bom.scala", original)?;

  let applicator = builtin_applicator(false)?;
  applicator.run(&temp_dir.path().join("src"))?;

  // The BOM moves with the first body line; no bytes are dropped
  let content = fs::read_to_string(&file)?;
  assert!(content.starts_with(DEFAULT_HEADER));
  assert!(content.ends_with(original));

  Ok(())
}

#[test]
fn test_non_utf8_file_aborts_the_run() -> Result<()> {
  let temp_dir = tempdir()?;
  let src = temp_dir.path().join("src");
  fs::create_dir_all(&src)?;
  fs::write(src.join("Binary.scala"), [0xFF, 0xFE, 0x00, 0x00])?;

  let applicator = builtin_applicator(false)?;
  let err = applicator.run(&src).unwrap_err();

  assert!(err.to_string().contains("Failed to read file"));
  assert!(err.to_string().contains("Binary.scala"));

  Ok(())
}

#[test]
fn test_invalid_glob_pattern_is_rejected() -> Result<()> {
  let header = HeaderTemplate::builtin().render(&HeaderData::current_year())?;

  let result = Applicator::new(ApplicatorConfig {
    ignore_patterns: vec!["[".to_string()],
    ..ApplicatorConfig::new(header)
  });

  assert!(result.is_err());

  Ok(())
}

#[test]
fn test_missing_template_file_is_a_read_error() {
  let err = HeaderTemplate::from_file(Path::new("/nonexistent/notice.txt")).unwrap_err();
  assert!(matches!(err, HeaderError::Read { .. }));
}

#[test]
fn test_directory_with_matching_name_is_skipped() -> Result<()> {
  let temp_dir = tempdir()?;

  // A directory named like a source file must not be opened as one
  let file = common::write_file(temp_dir.path(), "src/odd.scala/Inner.scala", "object Inner\n")?;

  let applicator = builtin_applicator(false)?;
  let report = applicator.run(&temp_dir.path().join("src"))?;

  assert_eq!(report.summary().scanned, 1);
  assert!(fs::read_to_string(&file)?.starts_with(DEFAULT_HEADER));

  Ok(())
}

#[cfg(unix)]
#[test]
fn test_unwritable_directory_preserves_original() -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  let temp_dir = tempdir()?;
  let src = temp_dir.path().join("src");
  fs::create_dir_all(&src)?;
  let file = src.join("Main.scala");
  fs::write(&file, common::UNLICENSED_SCALA)?;

  // Reading still works, but the temporary file next to the target cannot be
  // created, so the rewrite fails before the original is touched
  fs::set_permissions(&src, fs::Permissions::from_mode(0o555))?;

  // Permission bits do not bind root; skip the scenario there
  if fs::write(src.join(".probe"), b"x").is_ok() {
    let _ = fs::remove_file(src.join(".probe"));
    fs::set_permissions(&src, fs::Permissions::from_mode(0o755))?;
    return Ok(());
  }

  let applicator = builtin_applicator(false)?;
  let result = applicator.run(&src);

  fs::set_permissions(&src, fs::Permissions::from_mode(0o755))?;

  assert!(result.is_err());
  assert_eq!(fs::read_to_string(&file)?, common::UNLICENSED_SCALA);

  Ok(())
}
