// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure reasons and the text written to stderr when the child gave none.

use std::io;

use crate::status::{Completion, GENERIC_FAILURE};

/// Why a run did not end in a clean exit.
///
/// Only the rendered message reaches callers; the variants stay internal.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Failure {
    /// The executable was not found on the search path.
    #[error("failed to launch `{program}`: executable file not found")]
    NotFound { program: String },

    /// The executable exists but may not be executed.
    #[error("failed to launch `{program}`: permission denied")]
    PermissionDenied { program: String },

    /// Spawning or waiting failed for any other reason.
    #[error("failed to launch `{program}`: {source}")]
    Launch { program: String, source: io::Error },

    /// The child ran and exited non-zero.
    #[error("`{program}` exited with status {code}")]
    Exited { program: String, code: u32 },

    /// The child was killed by a signal.
    #[error("`{program}` terminated by signal {name}")]
    Signaled {
        program: String,
        signal: i32,
        name: String,
    },

    /// The child ended without an exit code or a signal.
    #[error("`{program}` ended without an exit status")]
    Unknown { program: String },
}

impl Failure {
    /// Classify an error from spawning or waiting on `program`.
    pub(crate) fn launch(program: &str, source: io::Error) -> Self {
        let program = program.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => Failure::NotFound { program },
            io::ErrorKind::PermissionDenied => Failure::PermissionDenied { program },
            _ => Failure::Launch { program, source },
        }
    }

    /// Describe a completed child that did not exit cleanly.
    pub(crate) fn completed(program: &str, completion: Completion) -> Self {
        let program = program.to_string();
        match completion {
            Completion::Exited(code) => Failure::Exited { program, code },
            Completion::Signaled(signal) => Failure::Signaled {
                program,
                signal,
                name: signal_name(signal),
            },
            Completion::Unknown => Failure::Unknown { program },
        }
    }

    /// Exit code reported for this failure.
    pub(crate) fn exit_code(&self) -> u32 {
        match self {
            Failure::NotFound { .. }
            | Failure::PermissionDenied { .. }
            | Failure::Launch { .. }
            | Failure::Unknown { .. } => GENERIC_FAILURE,
            Failure::Exited { code, .. } => *code,
            Failure::Signaled { signal, .. } => Completion::Signaled(*signal).exit_code(),
        }
    }
}

#[cfg(unix)]
fn signal_name(signal: i32) -> String {
    match nix::sys::signal::Signal::try_from(signal) {
        Ok(sig) => format!("{} ({signal})", sig.as_str()),
        Err(_) => signal.to_string(),
    }
}

#[cfg(not(unix))]
fn signal_name(signal: i32) -> String {
    signal.to_string()
}

#[cfg(test)]
#[path = "failure_tests.rs"]
mod tests;
