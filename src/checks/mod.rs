//! Project checks
//!
//! - `structure` - required files, directories, sections, workspace file
//! - `git` - repository metadata and remote
//!
//! The placeholder scan lives in [`crate::scanner`].

pub mod git;
pub mod structure;

pub use git::{local_repo_initialized, remote_configured};
pub use structure::{file_contains_sections, required_dirs, required_files, workspace_file_exists};
