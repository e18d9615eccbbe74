//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing and supports subcommands for
//! extensibility.

mod apply;

pub use apply::{ApplyArgs, run_apply};
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Version string for `--version`, extended with the build's git hash when the
/// build script found one.
fn long_version() -> String {
  let hash = env!("GIT_HASH");
  let date = env!("GIT_DATE");

  if hash.is_empty() {
    env!("CARGO_PKG_VERSION").to_string()
  } else {
    format!("{} ({hash} {date})", env!("CARGO_PKG_VERSION"))
  }
}

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  version,
  long_version = long_version(),
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Add license headers to files under src/ (the default root)
  applicense

  # Check for missing headers without modifying files
  applicense --check modules/core/src

  # Preview the exact rewrite each file would receive
  applicense --check --diff

  # Use a custom header template with a fixed year
  applicense --header-file notice-template.txt --year 2024

  # Cover additional languages
  applicense -e scala -e java -e kt

  # Skip generated sources
  applicense --ignore \"**/generated/**\"
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Command>,

  #[command(flatten)]
  pub apply_args: ApplyArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Add missing license headers to source files (default)
  Apply(ApplyArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Get the effective apply arguments, whether from a subcommand or top-level
  pub fn get_apply_args(self) -> ApplyArgs {
    match self.command {
      Some(Command::Apply(args)) => args,
      None => self.apply_args,
    }
  }
}
