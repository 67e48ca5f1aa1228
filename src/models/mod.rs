//! Data models for scaffold-check
//!
//! Core abstractions:
//! - `CheckResult`: the outcome of one check against the project
//! - `RunSummary`: every result of one validation run, in execution order

mod result;
mod summary;

pub use result::CheckResult;
pub use summary::RunSummary;
