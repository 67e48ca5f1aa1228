//! Check result model
//!
//! A result records the verdict of a single check. The message is always
//! present (empty when there is nothing to say) so rendering never branches
//! on a missing value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check name, unique within a run
    pub name: String,

    /// Whether the project satisfied the check
    pub passed: bool,

    /// Detail for the report (empty when there is none)
    #[serde(default)]
    pub message: String,
}

impl CheckResult {
    /// A passing result with no message
    #[must_use]
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: String::new(),
        }
    }

    /// A passing result carrying a detail message
    #[must_use]
    pub fn pass_with(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
        }
    }

    /// A failing result
    #[must_use]
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: message.into(),
        }
    }

    /// Report marker for this result
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        if self.passed { "[OK]" } else { "[FAIL]" }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker(), self.name)?;
        if !self.message.is_empty() {
            write!(f, " - {}", self.message)?;
        }
        Ok(())
    }
}
