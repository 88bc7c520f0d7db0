use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use crate::error::{Error, Result};

/// Exit code used when the child was killed by a signal.
pub const SIGNALED_EXIT_CODE: i32 = 1;

/// Exit code used when the launcher could not start the child at all.
///
/// 255 is what relays such as `ssh` report for their own failures, which keeps
/// "could not start the tool" apart from the tool's usual failure codes. A child
/// that itself exits with 255 yields the same status; the two cases differ only
/// in the `failed to start` line on stderr.
pub const LAUNCH_FAILED_EXIT_CODE: i32 = 255;

/// How the child process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildOutcome {
    /// Normal exit with the given code.
    Exited(i32),
    /// Terminated by the named signal (e.g. `SIGKILL`).
    Signaled(String),
}

/// The launcher's final state; converted into the process exit status exactly once.
#[derive(Debug)]
pub enum Termination {
    Child(ChildOutcome),
    FailedToStart(Error),
}

impl Termination {
    /// The status the launcher exits with.
    pub fn code(&self) -> i32 {
        match self {
            Termination::Child(ChildOutcome::Exited(code)) => *code,
            Termination::Child(ChildOutcome::Signaled(_)) => SIGNALED_EXIT_CODE,
            Termination::FailedToStart(_) => LAUNCH_FAILED_EXIT_CODE,
        }
    }

    /// The single diagnostic line for this termination, if any.
    ///
    /// A normal exit prints nothing; the child already said what it had to say.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Termination::Child(ChildOutcome::Exited(_)) => None,
            Termination::Child(ChildOutcome::Signaled(name)) => {
                Some(format!("exit by signal: {name}"))
            }
            Termination::FailedToStart(err) => Some(format!("failed to start: {err}")),
        }
    }
}

impl From<Result<ChildOutcome>> for Termination {
    fn from(result: Result<ChildOutcome>) -> Self {
        match result {
            Ok(outcome) => Termination::Child(outcome),
            Err(err) => Termination::FailedToStart(err),
        }
    }
}

/// Runs `program` with `args`, sharing stdin, stdout and stderr with this
/// process, and blocks until it ends.
///
/// Nothing is captured or buffered: the child sees the same terminal (or pipes)
/// the launcher was given.
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the program can't be started.
///
/// # Examples
///
/// ```no_run
/// use apimock_dist::{spawn, ChildOutcome};
/// use std::path::Path;
///
/// let outcome = spawn(Path::new("/usr/bin/true"), Vec::<String>::new()).unwrap();
/// assert_eq!(outcome, ChildOutcome::Exited(0));
/// ```
pub fn spawn<I, S>(program: &Path, args: I) -> Result<ChildOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| Error::Spawn {
            path: program.to_path_buf(),
            source,
        })?;
    Ok(outcome_of(status))
}

/// Classifies an exit status. A status with neither a code nor a signal (not
/// produced on any supported platform) counts as a generic failure.
pub fn outcome_of(status: ExitStatus) -> ChildOutcome {
    if let Some(code) = status.code() {
        return ChildOutcome::Exited(code);
    }
    match terminating_signal(&status) {
        Some(sig) => ChildOutcome::Signaled(signal_name(sig)),
        None => ChildOutcome::Exited(SIGNALED_EXIT_CODE),
    }
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// `SIGTERM`-style name for a signal number, or `signal <n>` if unknown.
#[cfg(unix)]
pub fn signal_name(sig: i32) -> String {
    match nix::sys::signal::Signal::try_from(sig) {
        Ok(signal) => signal.as_str().to_string(),
        Err(_) => format!("signal {sig}"),
    }
}

#[cfg(not(unix))]
pub fn signal_name(sig: i32) -> String {
    format!("signal {sig}")
}
