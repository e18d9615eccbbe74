//! # Header Module
//!
//! This module owns the header block that gets stamped into source files:
//! the built-in constant, loading of custom templates, `{{year}}` rendering,
//! and the validation that keeps reruns idempotent.
//!
//! Templates are inserted verbatim, so they are expected to already be
//! comment-formatted for the languages they will land in. The one structural
//! requirement is that the rendered block carries the word `Copyright` in its
//! second line, because that is the line the presence check inspects on the
//! next run.
//!
//! ## Example
//!
//! ```rust
//! use applicense::header::{HeaderData, HeaderTemplate};
//!
//! # fn main() -> anyhow::Result<()> {
//! let template = HeaderTemplate::builtin();
//! let header = template.render(&HeaderData::current_year())?;
//!
//! assert!(header.text().ends_with('\n'));
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use thiserror::Error;

use crate::processor::file_io::normalize_newlines;
use crate::verbose_log;

/// Substring whose presence in a file's second line marks it as already
/// licensed.
pub const HEADER_MARKER: &str = "Copyright";

/// The built-in header block, stamped as-is into files that lack one.
///
/// The second line carries [`HEADER_MARKER`], which is what makes a stamped
/// file detectable on the next run.
pub const DEFAULT_HEADER: &str = r#"/*--------------------------------------------------------------------------
 *  Copyright 2013 Taro L. Saito
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 *--------------------------------------------------------------------------*/
"#;

/// Errors raised while loading, rendering, or validating a header template.
#[derive(Debug, Error)]
pub enum HeaderError {
  /// The template file could not be read.
  #[error("Failed to read header template '{path}': {source}")]
  Read {
    path: String,
    source: std::io::Error,
  },

  /// The template rendered to an empty string.
  #[error("Header template '{path}' is empty")]
  Empty { path: String },

  /// The rendered template lacks the marker word on its second line, so a
  /// stamped file would be re-stamped on every run.
  #[error("Header template '{path}' must carry \"Copyright\" in its second line; that line is how existing headers are detected on reruns")]
  MarkerMissing { path: String },
}

/// Data used to fill out a header template.
pub struct HeaderData {
  /// The copyright year substituted for `{{year}}`
  pub year: String,
}

impl HeaderData {
  /// Header data carrying the current local year.
  pub fn current_year() -> Self {
    Self {
      year: chrono::Local::now().year().to_string(),
    }
  }
}

/// Where a template's text came from, kept for error messages.
#[derive(Debug, Clone)]
enum TemplateSource {
  Builtin,
  File(PathBuf),
}

impl TemplateSource {
  fn label(&self) -> String {
    match self {
      TemplateSource::Builtin => "<built-in>".to_string(),
      TemplateSource::File(path) => path.display().to_string(),
    }
  }
}

/// A header template plus its provenance.
///
/// Call [`render`](Self::render) to substitute `{{year}}` and obtain a
/// validated [`RenderedHeader`] ready for stamping.
#[derive(Debug, Clone)]
pub struct HeaderTemplate {
  template: String,
  source: TemplateSource,
}

impl Default for HeaderTemplate {
  fn default() -> Self {
    Self::builtin()
  }
}

impl HeaderTemplate {
  /// The built-in template.
  pub fn builtin() -> Self {
    Self {
      template: DEFAULT_HEADER.to_string(),
      source: TemplateSource::Builtin,
    }
  }

  /// Loads a custom template from a file.
  ///
  /// # Errors
  ///
  /// Returns [`HeaderError::Read`] if the file does not exist, cannot be
  /// read, or is not valid UTF-8.
  pub fn from_file(path: &Path) -> Result<Self, HeaderError> {
    verbose_log!("Loading header template from: {}", path.display());

    let template = fs::read_to_string(path).map_err(|source| HeaderError::Read {
      path: path.display().to_string(),
      source,
    })?;

    Ok(Self {
      template,
      source: TemplateSource::File(path.to_path_buf()),
    })
  }

  /// Renders the template with the given data and validates the result.
  ///
  /// Rendering replaces every `{{year}}` occurrence, normalizes line endings
  /// to LF, and guarantees the text ends with a newline so the first body
  /// line of a stamped file starts on its own line.
  ///
  /// # Errors
  ///
  /// Returns [`HeaderError::Empty`] for an empty render and
  /// [`HeaderError::MarkerMissing`] when the second line of the rendered
  /// text does not contain [`HEADER_MARKER`].
  pub fn render(&self, data: &HeaderData) -> Result<RenderedHeader, HeaderError> {
    verbose_log!("Rendering header template with year: {}", data.year);

    let mut text = normalize_newlines(&self.template.replace("{{year}}", &data.year)).into_owned();
    if text.trim().is_empty() {
      return Err(HeaderError::Empty {
        path: self.source.label(),
      });
    }
    if !text.ends_with('\n') {
      text.push('\n');
    }

    let second_line_ok = text.lines().nth(1).is_some_and(|line| line.contains(HEADER_MARKER));
    if !second_line_ok {
      return Err(HeaderError::MarkerMissing {
        path: self.source.label(),
      });
    }

    let line_count = text.lines().count();
    Ok(RenderedHeader { text, line_count })
  }
}

/// A rendered, validated header block.
///
/// Invariants: LF line endings, trailing newline, at least two lines, and
/// [`HEADER_MARKER`] somewhere in the second line.
#[derive(Debug, Clone)]
pub struct RenderedHeader {
  text: String,
  line_count: usize,
}

impl RenderedHeader {
  /// The full header text, ending in a newline.
  pub fn text(&self) -> &str {
    &self.text
  }

  /// Number of lines in the header block.
  pub const fn line_count(&self) -> usize {
    self.line_count
  }
}
