//! Placeholder scanner - finds template tokens left after instantiation
//!
//! Walks the project tree in lexical order and searches every text file for
//! `{{UPPERCASE_NAME}}` tokens. Directories named in the [`IgnoreSpec`] or the
//! exempt set are pruned, exempt file names are skipped.
//!
//! # Skip policy
//!
//! A file that cannot be read as UTF-8 text is skipped, never reported. The
//! reason is recorded in [`ScanReport::skipped`] so callers can tell binary
//! files from unreadable ones.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::ignore::IgnoreSpec;
use crate::models::CheckResult;

/// Name of the placeholder check
pub const CHECK_NAME: &str = "No placeholders";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[A-Z_]+\}\}").expect("placeholder pattern is valid"));

/// Whether `content` contains a placeholder token
#[must_use]
pub fn contains_placeholder(content: &str) -> bool {
    PLACEHOLDER.is_match(content)
}

/// Why a file was left out of the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Content is not valid UTF-8 (binary or foreign encoding)
    NotText,
    /// The OS denied read access
    PermissionDenied,
    /// Any other IO failure, including unreadable directories
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotText => write!(f, "not text"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::Unreadable => write!(f, "unreadable"),
        }
    }
}

impl From<&io::Error> for SkipReason {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::InvalidData => Self::NotText,
            _ => Self::Unreadable,
        }
    }
}

/// Outcome of scanning one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileVerdict {
    /// Text file without placeholders
    Clean,
    /// Text file containing at least one placeholder
    Placeholder,
    /// File could not be inspected
    Skipped(SkipReason),
}

/// Inspect a single file
#[must_use]
pub fn scan_file(path: &Path) -> FileVerdict {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(content) if contains_placeholder(&content) => FileVerdict::Placeholder,
            Ok(_) => FileVerdict::Clean,
            Err(_) => FileVerdict::Skipped(SkipReason::NotText),
        },
        Err(err) => FileVerdict::Skipped(SkipReason::from(&err)),
    }
}

/// Result of a tree scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Files that were read and searched
    pub files_scanned: usize,
    /// Files containing placeholders, relative to the root, in walk order
    pub offenders: Vec<PathBuf>,
    /// Paths left out of the scan and why, relative to the root
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

impl ScanReport {
    /// Convert into the placeholder check result
    #[must_use]
    pub fn into_check_result(self) -> CheckResult {
        if self.offenders.is_empty() {
            return CheckResult::pass(CHECK_NAME);
        }

        let files: Vec<String> = self.offenders.iter().map(|p| display_path(p)).collect();
        CheckResult::fail(
            CHECK_NAME,
            format!(
                "{} file(s) have unreplaced placeholders: {}",
                files.len(),
                files.join(", ")
            ),
        )
    }
}

/// Render a relative path with forward slashes
fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Scanner configured with the exclusions for one project
#[derive(Debug)]
pub struct PlaceholderScanner<'a> {
    ignore: &'a IgnoreSpec,
    exempt_dirs: BTreeSet<&'a str>,
    exempt_files: BTreeSet<&'a str>,
}

impl<'a> PlaceholderScanner<'a> {
    /// Create a scanner
    #[must_use]
    pub fn new(
        ignore: &'a IgnoreSpec,
        exempt_dirs: &'a [String],
        exempt_files: &'a [String],
    ) -> Self {
        Self {
            ignore,
            exempt_dirs: exempt_dirs.iter().map(String::as_str).collect(),
            exempt_files: exempt_files.iter().map(String::as_str).collect(),
        }
    }

    /// Whether the walk should descend into / consider this entry
    fn keep(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let Some(name) = entry.file_name().to_str() else {
            return true;
        };
        if self.ignore.contains(name) {
            log::debug!("Pruning ignored path {}", entry.path().display());
            return false;
        }
        if entry.file_type().is_dir() && self.exempt_dirs.contains(name) {
            log::debug!("Pruning exempt directory {}", entry.path().display());
            return false;
        }
        true
    }

    /// Walk the tree under `root` and collect offenders
    #[must_use]
    pub fn scan_tree(&self, root: &Path) -> ScanReport {
        let mut report = ScanReport::default();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.keep(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(root);
                    let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
                    let reason = err.io_error().map_or(SkipReason::Unreadable, SkipReason::from);
                    log::debug!("Skipping {} ({reason})", relative.display());
                    report.skipped.push((relative, reason));
                    continue;
                },
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if self.exempt_files.contains(&*name) {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
            match scan_file(path) {
                FileVerdict::Clean => report.files_scanned += 1,
                FileVerdict::Placeholder => {
                    report.files_scanned += 1;
                    report.offenders.push(relative);
                },
                FileVerdict::Skipped(reason) => {
                    if reason == SkipReason::PermissionDenied {
                        log::warn!(
                            "Skipping {} ({reason}); it was not scanned",
                            relative.display()
                        );
                    } else {
                        log::debug!("Skipping {} ({reason})", relative.display());
                    }
                    report.skipped.push((relative, reason));
                },
            }
        }

        report
    }

    /// Scan the tree and produce the check result
    #[must_use]
    pub fn scan(&self, root: &Path) -> CheckResult {
        self.scan_tree(root).into_check_result()
    }
}

/// Scan `root` for placeholders with the given exclusions
#[must_use]
pub fn scan(
    root: &Path,
    ignore: &IgnoreSpec,
    exempt_dirs: &[String],
    exempt_files: &[String],
) -> CheckResult {
    PlaceholderScanner::new(ignore, exempt_dirs, exempt_files).scan(root)
}
