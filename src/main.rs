//! citecheck - Validate file:line citations in findings reports
//!
//! citecheck provides:
//! - Extraction of `path:line` citations from free-form text
//! - Existence checks for every cited file
//! - Line-count validation of cited lines
//! - Text, jsonl and json output with CI-friendly exit status

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod citations;
mod cli;
mod core;

fn main() -> Result<ExitCode> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return Ok(cli::usage_error(err)),
    };

    cli::init_tracing(cli.verbose);
    cli::run(cli)
}
