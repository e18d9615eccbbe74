//! # applicense
//!
//! A tool that stamps a copyright license header into source files that lack
//! one.

mod cli;
mod config;
mod detection;
mod diff;
mod header;
mod logging;
mod output;
mod processor;
mod report;
mod scanner;

use anyhow::Result;

use crate::cli::{Cli, run_apply};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run_apply(cli.get_apply_args())
}
