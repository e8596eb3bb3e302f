//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::citations::check::{check_report, CheckOptions};
use crate::citations::verify::RepeatBounds;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};

/// Printed to stdout whenever the arguments cannot be parsed
pub const USAGE: &str = "Usage: citecheck <REPORT>\n\
Validates that all file:line references in REPORT point to existing files and valid line numbers.";

/// citecheck - verify file:line citations in a findings report.
#[derive(Parser, Debug)]
#[command(name = "citecheck")]
#[command(
    author,
    version,
    about,
    long_about = r#"citecheck scans a findings report for `path:line` citations and checks that
every cited file exists and that every cited line is within the file.

Recognized extensions: cs, py, ts, js, tsx, jsx, java, go, rb, rs, php, cpp, c, h

Exit status is 1 when any citation is broken (missing file, line out of range,
line < 1). Files that exist but cannot be read as UTF-8 are reported as
warnings and do not fail the run.

Examples:
    citecheck findings.md
    citecheck docs/archaeology.md --root ../service
    citecheck findings.md --check-repeats --format jsonl
"#
)]
pub struct Cli {
    /// Findings report to validate.
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Directory cited paths are resolved against.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Directory that relative cited paths are resolved against (defaults to the\n\
current directory). The report path itself is always taken as given.\n\n\
Messages show cited paths exactly as written in the report."
    )]
    pub root: PathBuf,

    /// Bound-check every citation, not only the first per file.
    #[arg(
        long,
        long_help = "Bound-check every citation of a file against its line count.\n\n\
By default only the first citation of each file is bound-checked; later citations\n\
of the same path only need the file to exist."
    )]
    pub check_repeats: bool,

    /// Output format (text/jsonl/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "jsonl", "json"],
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): warnings and validation errors as bullet lists\n\
- jsonl: one JSON object per finding, then a summary object\n\
- json: a single JSON object\n\n\
The exit status is the same for every format."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. Colors are also disabled whenever stdout is not\n\
a terminal."
    )]
    pub no_color: bool,

    /// Verbose mode (debug logging on stderr).
    #[arg(
        short,
        long,
        long_help = "Enable debug logging on stderr. RUST_LOG takes precedence when set."
    )]
    pub verbose: bool,
}

/// Handle an argument parsing failure, returning the exit code to use
pub fn usage_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        kind => {
            eprintln!("error: {}", kind);
            println!("{}", USAGE);
            ExitCode::from(1)
        }
    }
}

/// Initialize the tracing subscriber (stderr, RUST_LOG overrides)
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let options = CheckOptions {
        root: cli.root,
        repeat_bounds: if cli.check_repeats {
            RepeatBounds::Every
        } else {
            RepeatBounds::FirstOnly
        },
    };
    tracing::debug!(report = %cli.report.display(), ?options, "checking report");

    let report = check_report(&cli.report, &options)?;

    let renderer = Renderer::with_config(render_config);
    print!("{}", renderer.render(&cli.report.display().to_string(), &report));

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
