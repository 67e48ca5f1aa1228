//! scaffold-check - validate a freshly scaffolded project before hand-off
//!
//! Runs the fixed check sequence against a project directory, prints the
//! report and exits with 0 (all checks passed), 1 (some check failed) or
//! 2 (the run could not start).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::process::ExitCode;

mod cli;
mod commands;

/// Exit code when the run could not start (bad path or config)
const EXIT_FATAL: u8 = 2;

/// Main entry point for the scaffold-check CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FATAL)
        },
    }
}
