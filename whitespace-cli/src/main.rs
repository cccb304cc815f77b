//! Whitespace CLI: lex and run a whitespace program.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Missing or unreadable file, lex error, rejected labels
//! - 2: Usage error
//! - 3: Runtime error

mod commands;

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use num_bigint::BigInt;

/// Run a whitespace program.
#[derive(Parser, Debug)]
#[command(name = "whitespace", version)]
pub struct Args {
    /// Source file. Looked up as given, then next to the executable.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Value stored by readchar/readnum at end of input.
    /// Without it, reading past the end of input is a runtime error.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub eof_value: Option<BigInt>,
    /// Stop with an error after this many executed instructions.
    #[arg(long, short = 'l', value_name = "N")]
    pub max_instructions: Option<u64>,
    /// Reject programs that define a label more than once.
    #[arg(long)]
    pub strict_labels: bool,
    /// Print the instruction listing instead of running the program.
    #[arg(long)]
    pub list: bool,
    /// Print statistics to stderr after running the program.
    #[arg(long, short = 's')]
    pub stats: bool,
}

const USAGE: &str = "Usage: whitespace [OPTIONS] <FILE>";

fn main() {
    let args = parse_args();
    init_logging();

    if let Err(code) = commands::execute(&args) {
        process::exit(code);
    }
}

/// Parse the command line. A missing or extra positional argument prints
/// the one-line usage; other errors, `--help` and `--version` go to clap.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
                eprintln!("{USAGE}");
                process::exit(2);
            }
            _ => e.exit(),
        },
    }
}

/// Log to stderr so program output on stdout stays clean. `RUST_LOG`
/// overrides the default level.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
