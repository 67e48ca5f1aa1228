//! Structural checks - required files, directories and sections
//!
//! Each check is a read-only predicate over the project root. None of them
//! return an error: missing or unreadable content is a failing result.

use std::fs;
use std::path::Path;

use crate::models::CheckResult;
use crate::paths;

/// Name of the required files check
pub const REQUIRED_FILES: &str = "Required files";

/// Name of the required directories check
pub const REQUIRED_DIRS: &str = "Directory structure";

/// Name of the workspace file check
pub const WORKSPACE_FILE: &str = "VS Code workspace";

fn missing_message(missing: &[&str]) -> String {
    format!("Missing: {}", missing.join(", "))
}

/// Check that every name exists directly under `root`
#[must_use]
pub fn required_files(root: &Path, names: &[String]) -> CheckResult {
    let missing: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| !root.join(name).exists())
        .collect();

    if missing.is_empty() {
        CheckResult::pass(REQUIRED_FILES)
    } else {
        CheckResult::fail(REQUIRED_FILES, missing_message(&missing))
    }
}

/// Check that every name is a directory directly under `root`
#[must_use]
pub fn required_dirs(root: &Path, names: &[String]) -> CheckResult {
    let missing: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| !root.join(name).is_dir())
        .collect();

    if missing.is_empty() {
        CheckResult::pass(REQUIRED_DIRS)
    } else {
        CheckResult::fail(REQUIRED_DIRS, missing_message(&missing))
    }
}

/// Name of the sections check for `file_name`
#[must_use]
pub fn sections_check_name(file_name: &str) -> String {
    format!("{file_name} sections")
}

/// Check that `file_name` contains every marker as a substring
#[must_use]
pub fn file_contains_sections(root: &Path, file_name: &str, markers: &[String]) -> CheckResult {
    let name = sections_check_name(file_name);
    let path = root.join(file_name);

    if !path.exists() {
        return CheckResult::fail(name, "File not found");
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => return CheckResult::fail(name, format!("Error reading file: {err}")),
    };

    let missing: Vec<&str> = markers
        .iter()
        .map(String::as_str)
        .filter(|marker| !content.contains(marker))
        .collect();

    if missing.is_empty() {
        CheckResult::pass(name)
    } else {
        CheckResult::fail(name, missing_message(&missing))
    }
}

/// Check for `<project-name>.code-workspace` directly under `root`
#[must_use]
pub fn workspace_file_exists(root: &Path) -> CheckResult {
    match paths::workspace_file(root) {
        Some(path) if path.is_file() => CheckResult::pass(WORKSPACE_FILE),
        Some(_) => CheckResult::fail(WORKSPACE_FILE, "File not found"),
        None => CheckResult::fail(WORKSPACE_FILE, "Cannot determine project name"),
    }
}
