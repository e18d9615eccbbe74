//! # applicense
//!
//! A tool that stamps a copyright license header into source files that lack one, scanning a source tree recursively.
//!
//! `applicense` modifies source files in place and avoids adding a header to any file that already has one: a file
//! whose second line contains the word `Copyright` is treated as licensed and left untouched, which makes repeated
//! runs safe. Rewrites go through a temporary file in the target directory followed by an atomic rename, so an
//! interrupted run never leaves a half-written source file behind.
//!
//! ## Features
//!
//! * Recursively scan a root directory and add license headers to files matching an extension allow-list
//! * Second-line `Copyright` detection keeps the operation idempotent
//! * Atomic in-place rewrites (temp file then rename) that preserve file permissions
//! * Check-only mode with optional diff preview, suitable for CI
//! * Ignore patterns to exclude specific files or directories
//! * Custom header templates with `{{year}}` substitution
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use applicense::header::{HeaderData, HeaderTemplate};
//! use applicense::processor::{Applicator, ApplicatorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     // Render the built-in header with the current year
//!     let header = HeaderTemplate::builtin().render(&HeaderData::current_year())?;
//!
//!     // Report missing headers without modifying anything
//!     let applicator = Applicator::new(ApplicatorConfig {
//!         check_only: true,
//!         ..ApplicatorConfig::new(header)
//!     })?;
//!
//!     let report = applicator.run(Path::new("src"))?;
//!
//!     if !report.missing_files().is_empty() {
//!         println!("Some files are missing license headers");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Core functionality for processing files and directories
//! * [`header`] - Header templates, rendering, and validation
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`header`]: crate::header
//! [`logging`]: crate::logging

// Re-export modules for public API
pub mod config;
pub mod detection;
pub mod diff;
pub mod header;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod scanner;

// Re-export macros
// Note: We don't re-export the macros here since they're already defined in the logging module
// and would cause redefinition errors
