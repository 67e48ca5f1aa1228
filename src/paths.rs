//! Centralized path definitions for scaffold-check
//!
//! ## Project Layout
//!
//! ```text
//! my-project/                       # Project root (the directory name is the project name)
//! ├── .git/                         # Repository metadata (must exist)
//! ├── .scaffold-check.toml          # OPTIONAL: validator config overrides
//! └── my-project.code-workspace     # Editor workspace file (must exist)
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// Repository metadata directory
pub const GIT_DIR: &str = ".git";

/// Validator configuration filename
pub const CONFIG_FILE: &str = ".scaffold-check.toml";

/// Extension of the editor workspace file
pub const WORKSPACE_EXTENSION: &str = "code-workspace";

/// Get path to the repository metadata directory.
#[must_use]
pub fn git_dir(root: &Path) -> PathBuf {
    root.join(GIT_DIR)
}

/// Get path to `.scaffold-check.toml`.
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Project name: the root directory's own name.
#[must_use]
pub fn project_name(root: &Path) -> Option<String> {
    root.file_name().map(|n| n.to_string_lossy().to_string())
}

/// Get path to `<project-name>.code-workspace`.
///
/// Returns `None` when the root has no final component (e.g. `/`).
#[must_use]
pub fn workspace_file(root: &Path) -> Option<PathBuf> {
    project_name(root).map(|name| root.join(format!("{name}.{WORKSPACE_EXTENSION}")))
}

/// Resolve the project root to an absolute directory path.
///
/// Relative paths (including `.`) are canonicalized so the project name can
/// be read from the final component.
pub fn resolve_project_root(path: &Path) -> io::Result<PathBuf> {
    let root = path.canonicalize()?;
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("not a directory: {}", root.display()),
        ));
    }
    Ok(root)
}
