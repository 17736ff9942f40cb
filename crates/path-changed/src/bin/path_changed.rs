//! `path-changed` — tell whether the value at a JSON Pointer changed.
//!
//! Usage:
//!   path-changed '<pointer>' [--array-paths]
//!
//! Reads `{"doc": ..., "changes": [...], "options": {...}}` from stdin and
//! prints `true` or `false`. Set `RUST_LOG=path_changed=debug` to see which
//! change decided the answer.

use path_changed::cli::{evaluate_input, read_input, Args};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let Some(args) = Args::parse(std::env::args().skip(1)) else {
        eprintln!("First argument must be a JSON Pointer.");
        std::process::exit(1);
    };

    let result = read_input(io::stdin().lock())
        .and_then(|input| evaluate_input(&input, &args.pointer, args.array_paths));

    match result {
        Ok(changed) => {
            if let Err(e) = writeln!(io::stdout(), "{changed}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
