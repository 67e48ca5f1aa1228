//! Validate a scaffolded project

use std::path::Path;

use anyhow::Context;
use scaffold_check::output::{OutputMode, ValidationReport};
use scaffold_check::paths;
use scaffold_check::runner::Validator;

use super::load_config;

/// Run every check against the project at `path` and print the report
///
/// Returns whether all checks passed.
pub fn validate(
    path: &Path,
    config_path: Option<&Path>,
    fail_fast: bool,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let root = paths::resolve_project_root(path)
        .with_context(|| format!("cannot open project {}", path.display()))?;
    let config = load_config(&root, config_path)?;

    let validator = Validator::new(root, config);
    let summary = validator.validate(fail_fast);

    ValidationReport::new(validator.root(), &summary).render(mode)?;

    if mode == OutputMode::Human {
        if summary.passed {
            println!("\n[SUCCESS] Project validation successful!");
        } else {
            println!("\n[ERROR] Validation failed - please review and fix issues");
        }
    }

    Ok(summary.passed)
}
