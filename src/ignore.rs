//! Ignore matcher - directory exclusions for tree scans
//!
//! Ignore patterns are shared with the template copy step, which understands
//! globs such as `*.pyc`. A directory walk can only prune exact names, so a
//! pattern that starts or ends with a wildcard is dropped here and only the
//! literal entries (`node_modules`, `.git`, ...) are kept.

use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Wildcard character recognised in ignore patterns
pub const WILDCARD: char = '*';

/// Set of literal path components excluded from scans
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSpec {
    names: BTreeSet<String>,
}

impl IgnoreSpec {
    /// Derive the spec from raw ignore patterns
    ///
    /// Keeps every pattern with no wildcard at either end.
    #[must_use]
    pub fn build<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .filter(|p| !p.starts_with(WILDCARD) && !p.ends_with(WILDCARD))
            .collect();
        Self { names }
    }

    /// Whether a single path component is excluded
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Whether any component of `path` is excluded
    ///
    /// Callers pass paths relative to the scan root; ancestors of the root
    /// should not take part in the match.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        path.components().any(|c| match c {
            Component::Normal(name) => name.to_str().is_some_and(|n| self.contains(n)),
            _ => false,
        })
    }

    /// The retained names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of retained names
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names were retained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
