//! Git integration
//!
//! Every git invocation goes through [`run_with_timeout`], which bounds the
//! call and reports failures as a [`GitError`] value. Callers decide how to
//! present the failure; nothing here panics or hangs on a stuck process.

use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Interval between exit-status polls
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Failure to obtain output from an external command
#[derive(Debug, Error)]
pub enum GitError {
    /// The executable is not on the command path
    #[error("{program} executable not found")]
    NotFound {
        /// Program that was invoked
        program: String,
    },

    /// The command did not finish in time and was killed
    #[error("{program} timed out after {}s", .timeout.as_secs_f64())]
    Timeout {
        /// Program that was invoked
        program: String,
        /// Bound that was exceeded
        timeout: Duration,
    },

    /// The OS refused to start the command
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying IO error
        source: io::Error,
    },

    /// Waiting on the running command failed
    #[error("failed waiting for {program}: {source}")]
    Wait {
        /// Program that was invoked
        program: String,
        /// Underlying IO error
        source: io::Error,
    },
}

impl GitError {
    /// Whether the failure was a timeout
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Run a command, killing it if it outlives `timeout`
///
/// Stdin is closed and stdout/stderr are captured. A non-zero exit is not an
/// error here; inspect `Output::status`. The bound covers collecting output
/// too, so a descendant that keeps a pipe open cannot stall the call.
pub fn run_with_timeout(command: &mut Command, timeout: Duration) -> Result<Output, GitError> {
    let program = command.get_program().to_string_lossy().to_string();

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                GitError::NotFound {
                    program: program.clone(),
                }
            } else {
                GitError::Spawn {
                    program: program.clone(),
                    source,
                }
            }
        })?;

    let start = Instant::now();
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = loop {
        let status = child.try_wait().map_err(|source| GitError::Wait {
            program: program.clone(),
            source,
        })?;
        if let Some(status) = status {
            break status;
        }
        if start.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            return Err(GitError::Timeout { program, timeout });
        }
        thread::sleep(POLL_INTERVAL);
    };

    Ok(Output {
        status,
        stdout: collect(&stdout, start, &program, timeout)?,
        stderr: collect(&stderr, start, &program, timeout)?,
    })
}

/// Read a pipe to EOF on its own thread
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<io::Result<Vec<u8>>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let read = match pipe {
            Some(mut pipe) => pipe.read_to_end(&mut buf).map(|_| buf),
            None => Ok(buf),
        };
        let _ = tx.send(read);
    });
    rx
}

/// Wait for a reader until `timeout` has elapsed since `start`
///
/// A reader still blocked at that point is abandoned; it exits once the
/// last writer closes the pipe.
fn collect(
    reader: &Receiver<io::Result<Vec<u8>>>,
    start: Instant,
    program: &str,
    timeout: Duration,
) -> Result<Vec<u8>, GitError> {
    match reader.recv_timeout(timeout.saturating_sub(start.elapsed())) {
        Ok(Ok(buf)) => Ok(buf),
        Ok(Err(source)) => Err(GitError::Wait {
            program: program.to_string(),
            source,
        }),
        Err(RecvTimeoutError::Timeout) => Err(GitError::Timeout {
            program: program.to_string(),
            timeout,
        }),
        Err(RecvTimeoutError::Disconnected) => Err(GitError::Wait {
            program: program.to_string(),
            source: io::Error::other("output reader stopped"),
        }),
    }
}

/// Get the configured URL of `remote` in the repository at `root`
///
/// `Ok(None)` means git ran but reported no such remote (non-zero exit).
pub fn remote_url(
    program: &str,
    root: &Path,
    remote: &str,
    timeout: Duration,
) -> Result<Option<String>, GitError> {
    let output = run_with_timeout(
        Command::new(program).args(["remote", "get-url", remote]).current_dir(root),
        timeout,
    )?;

    if !output.status.success() {
        log::debug!(
            "{program} remote get-url {remote} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
}
