//! Exit handling: exit codes and process hardening.

use std::process::ExitCode;

/// Why the CLI stopped before or instead of finishing normally.
#[derive(Debug)]
pub enum Exit {
    /// Early exit (help, version). Not an error.
    Done,
    /// Bad command line.
    Usage(String),
    /// Configuration, generation, or output failed.
    Failed(String),
}

impl Exit {
    pub fn code(&self) -> ExitCode {
        match self {
            Exit::Done => ExitCode::SUCCESS,
            Exit::Failed(_) => ExitCode::from(1),
            Exit::Usage(_) => ExitCode::from(2),
        }
    }
}

/// Keep generated secrets out of core dumps and away from ptrace.
pub fn harden() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
