//! CLI command implementations.

use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, warn};
use whitespace_common::Program;
use whitespace_vm::VmOptions;

use crate::Args;

/// Load, check, then list or run the program named by `args`.
pub fn execute(args: &Args) -> Result<(), i32> {
    let path = resolve_source(&args.file)?;
    let program = load(&path)?;
    check_labels(&program, args.strict_labels)?;

    if args.list {
        print!("{}", whitespace_lexer::disassemble(&program));
        return Ok(());
    }

    run(&program, args)
}

/// Find the source file: as given, then relative to the executable's
/// directory.
fn resolve_source(file: &Path) -> Result<PathBuf, i32> {
    if file.is_file() {
        return Ok(file.to_path_buf());
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(file)));
    match beside_exe {
        Some(path) if path.is_file() => {
            debug!(path = %path.display(), "resolved source next to executable");
            Ok(path)
        }
        _ => {
            eprintln!("error: could not open file: {}", file.display());
            Err(1)
        }
    }
}

fn load(path: &Path) -> Result<Program, i32> {
    let bytes = fs::read(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        1
    })?;

    // Only space, tab and newline are significant; other bytes are comments.
    let text = String::from_utf8_lossy(&bytes);

    whitespace_lexer::lex(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}

fn check_labels(program: &Program, strict: bool) -> Result<(), i32> {
    if strict {
        return program.check_labels().map_err(|e| {
            eprintln!("error: {e}");
            1
        });
    }

    for label in program.duplicate_labels() {
        warn!(%label, "label defined more than once, first definition wins");
    }
    Ok(())
}

fn run(program: &Program, args: &Args) -> Result<(), i32> {
    let mut options = VmOptions::new();
    if let Some(value) = &args.eof_value {
        options = options.with_eof_value(value.clone());
    }
    if let Some(limit) = args.max_instructions {
        options = options.with_instruction_limit(limit);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    let start = Instant::now();
    let result = whitespace_vm::run(program, stdin.lock(), output, options);
    let elapsed = start.elapsed();

    match result {
        Ok(summary) => {
            if args.stats {
                print_stats(summary.instructions_executed, elapsed);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

fn print_stats(executed: u64, elapsed: Duration) {
    let per_second = executed as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    eprintln!("Execution time: {elapsed:?}");
    eprintln!(
        "Instructions executed: {executed} ({}/s)",
        match per_second {
            n if n >= 1_000_000.0 => format!("{:.1}M", n / 1_000_000.0),
            n if n >= 1_000.0 => format!("{:.1}k", n / 1_000.0),
            n => format!("{n:.1}"),
        }
    );
}
