//! # Saitama CLI
//!
//! The binary is intentionally thin: argument parsing, confirmation prompts
//! and printing live in `cli/`, everything else is the `saitama` library.
//! This file only invokes `cli::run()` and turns an error into exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
