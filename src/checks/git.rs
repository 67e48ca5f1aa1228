//! Git checks - local metadata and remote configuration

use std::path::Path;
use std::time::Duration;

use crate::git;
use crate::models::CheckResult;
use crate::paths;

/// Name of the local repository check
pub const GIT_INITIALIZED: &str = "Git initialized";

/// Name of the remote check
pub const GIT_REMOTE: &str = "Git remote";

/// Check that the repository metadata directory exists
#[must_use]
pub fn local_repo_initialized(root: &Path) -> CheckResult {
    if paths::git_dir(root).is_dir() {
        CheckResult::pass(GIT_INITIALIZED)
    } else {
        CheckResult::fail(GIT_INITIALIZED, "No .git directory")
    }
}

/// Check that `remote` points at a URL containing `expected_host`
///
/// The git call is bounded by `timeout`. Timeouts, a missing executable and
/// OS errors all become failing results with the cause in the message.
#[must_use]
pub fn remote_configured(
    program: &str,
    root: &Path,
    remote: &str,
    expected_host: &str,
    timeout: Duration,
) -> CheckResult {
    match git::remote_url(program, root, remote, timeout) {
        Ok(Some(url)) if url.contains(expected_host) => CheckResult::pass_with(GIT_REMOTE, url),
        Ok(_) => CheckResult::fail(GIT_REMOTE, format!("No {expected_host} remote configured")),
        Err(err) => {
            log::debug!("Remote lookup failed: {err}");
            CheckResult::fail(GIT_REMOTE, format!("Error: {err}"))
        },
    }
}
