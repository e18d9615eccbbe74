#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// A small unlicensed Scala source used as fixture content.
pub const UNLICENSED_SCALA: &str = "package demo\n\nobject Main {\n  def main(args: Array[String]): Unit =\n    println(\"hello\")\n}\n";

/// A small unlicensed Java source.
pub const UNLICENSED_JAVA: &str = "package demo;\n\npublic final class Util {\n  private Util() {}\n}\n";

/// Content whose second line already carries a copyright notice, so the tool
/// must leave it alone.
pub const LICENSED_SCALA: &str =
  "/* Demo project\n * Copyright 2020 Demo Authors\n */\npackage demo\n\nobject Licensed\n";

/// Writes `content` at `root/rel`, creating parent directories as needed.
pub fn write_file(root: &Path, rel: &str, content: &str) -> Result<PathBuf> {
  let path = root.join(rel);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

/// Creates a `src/` tree with two unlicensed files and one licensed one.
pub fn populate_source_tree(root: &Path) -> Result<()> {
  write_file(root, "src/Main.scala", UNLICENSED_SCALA)?;
  write_file(root, "src/util/Util.java", UNLICENSED_JAVA)?;
  write_file(root, "src/Licensed.scala", LICENSED_SCALA)?;
  Ok(())
}
