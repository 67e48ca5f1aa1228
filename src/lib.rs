//! scaffold-check - validate a freshly scaffolded project before hand-off
//!
//! A template generator copies files, substitutes placeholder tokens and
//! initializes a repository. This library confirms none of that was left
//! incomplete: it runs a fixed, ordered sequence of read-only checks against
//! the project directory and aggregates them into a [`models::RunSummary`].

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod checks;
pub mod config;
pub mod git;
pub mod ignore;
pub mod models;
pub mod output;
pub mod paths;
pub mod runner;
pub mod scanner;
