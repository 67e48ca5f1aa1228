//! Check runner - executes checks in order and aggregates results
//!
//! [`run`] is the generic loop; [`Validator`] binds the fixed check sequence
//! to one project root and one configuration.

use std::path::{Path, PathBuf};

use crate::checks;
use crate::config::ValidatorConfig;
use crate::ignore::IgnoreSpec;
use crate::models::{CheckResult, RunSummary};
use crate::scanner::PlaceholderScanner;

/// A zero-argument check
pub type CheckFn<'a> = Box<dyn Fn() -> CheckResult + 'a>;

/// Run checks strictly in order
///
/// With `fail_fast`, execution stops after the first failing result; later
/// checks are not called and do not appear in the summary.
#[must_use]
pub fn run(checks: &[CheckFn<'_>], fail_fast: bool) -> RunSummary {
    let mut results = Vec::with_capacity(checks.len());

    for check in checks {
        let result = check();
        log::debug!("{result}");
        let failed = !result.passed;
        results.push(result);

        if failed && fail_fast {
            log::debug!("Stopping after first failure");
            break;
        }
    }

    RunSummary::from_results(results)
}

/// Validator for one scaffolded project
#[derive(Debug)]
pub struct Validator {
    root: PathBuf,
    config: ValidatorConfig,
    ignore: IgnoreSpec,
}

impl Validator {
    /// Create a validator for the project at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: ValidatorConfig) -> Self {
        let ignore = IgnoreSpec::build(&config.ignore_patterns);
        Self {
            root: root.into(),
            config,
            ignore,
        }
    }

    /// Project root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Ignore spec derived from the configuration
    #[must_use]
    pub const fn ignore_spec(&self) -> &IgnoreSpec {
        &self.ignore
    }

    /// The fixed check sequence, in execution order
    #[must_use]
    pub fn checks(&self) -> Vec<CheckFn<'_>> {
        let root = self.root.as_path();
        let config = &self.config;
        let ignore = &self.ignore;

        let checks: Vec<CheckFn<'_>> = vec![
            Box::new(move || {
                PlaceholderScanner::new(ignore, &config.exempt_dirs, &config.exempt_files)
                    .scan(root)
            }),
            Box::new(move || checks::local_repo_initialized(root)),
            Box::new(move || {
                checks::remote_configured(
                    &config.git.program,
                    root,
                    &config.git.remote,
                    &config.git.expected_host,
                    config.git.timeout(),
                )
            }),
            Box::new(move || checks::required_files(root, &config.required_files)),
            Box::new(move || checks::required_dirs(root, &config.required_dirs)),
            Box::new(move || {
                checks::file_contains_sections(
                    root,
                    &config.sections_file,
                    &config.required_sections,
                )
            }),
            Box::new(move || checks::workspace_file_exists(root)),
        ];
        checks
    }

    /// Run the fixed sequence against the project
    #[must_use]
    pub fn validate(&self, fail_fast: bool) -> RunSummary {
        log::info!("Validating {}", self.root.display());
        run(&self.checks(), fail_fast)
    }
}
