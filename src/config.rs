//! Validator configuration
//!
//! The validator consumes one immutable [`ValidatorConfig`] value. Built-in
//! defaults describe the standard project template; a project may override
//! any field with a `.scaffold-check.toml` file at its root.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file is not a valid configuration
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// Configuration for one validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Ignore patterns shared with the template copy step
    pub ignore_patterns: Vec<String>,
    /// Files that must exist directly under the project root
    pub required_files: Vec<String>,
    /// Directories that must exist directly under the project root
    pub required_dirs: Vec<String>,
    /// File whose content must carry the required sections
    pub sections_file: String,
    /// Section markers that must appear in `sections_file`
    pub required_sections: Vec<String>,
    /// Directory names never scanned for placeholders
    pub exempt_dirs: Vec<String>,
    /// File names never scanned for placeholders
    pub exempt_files: Vec<String>,
    /// Version control settings
    pub git: GitConfig,
}

/// Settings for the remote check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Executable invoked for remote lookups
    pub program: String,
    /// Remote whose URL is inspected
    pub remote: String,
    /// Substring the remote URL must contain
    pub expected_host: String,
    /// Upper bound on the git invocation, in seconds
    pub timeout_secs: u64,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: strings(&[
                "node_modules",
                "__pycache__",
                "*.pyc",
                ".venv",
                "venv",
                "dist",
                "build",
                ".next",
                "out",
                "*.lock",
                "package-lock.json",
                "yarn.lock",
                "poetry.lock",
                ".git",
                ".DS_Store",
                "Thumbs.db",
            ]),
            required_files: strings(&["CLAUDE.md", "_START-HERE.md", "README.md", ".gitignore"]),
            required_dirs: strings(&["product", "sprints", "technical", "business"]),
            sections_file: "CLAUDE.md".to_string(),
            required_sections: strings(&[
                "Role Division",
                "Git Automation",
                "Additional Resources",
            ]),
            exempt_dirs: strings(&[".config", "docs", ".githooks", "technical"]),
            exempt_files: strings(&["README.md"]),
            git: GitConfig::default(),
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            remote: "origin".to_string(),
            expected_host: "github.com".to_string(),
            timeout_secs: 5,
        }
    }
}

impl GitConfig {
    /// Timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ValidatorConfig {
    /// Parse a TOML document; missing fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the project's config file if present, otherwise the defaults
    pub fn discover(root: &Path) -> Result<Self, ConfigError> {
        let path = paths::config_file(root);
        if path.is_file() {
            log::debug!("Loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
