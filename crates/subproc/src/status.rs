// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit-status normalization.
//!
//! Collapses whatever the OS reports about a finished (or never started)
//! child into one non-negative exit code.

use std::process::ExitStatus;

/// Exit code reported when the child could not be launched or its status
/// could not be read as a normal exit.
pub(crate) const GENERIC_FAILURE: u32 = 1;

/// Offset added to a terminating signal number, as POSIX shells do.
pub(crate) const SIGNAL_EXIT_BASE: u32 = 128;

/// How a child that was successfully spawned came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Completion {
    /// Exited on its own with this status.
    Exited(u32),
    /// Killed by a signal (POSIX only).
    Signaled(i32),
    /// Neither an exit code nor a signal was available.
    Unknown,
}

impl Completion {
    pub(crate) fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            // Windows reports a DWORD; reinterpret instead of clamping so
            // NTSTATUS values stay recognizable.
            return Completion::Exited(code as u32);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Completion::Signaled(signal);
            }
        }
        Completion::Unknown
    }

    /// The normalized exit code for this completion. Never fails.
    pub(crate) fn exit_code(self) -> u32 {
        match self {
            Completion::Exited(code) => code,
            Completion::Signaled(signal) => {
                SIGNAL_EXIT_BASE.saturating_add(signal.unsigned_abs())
            }
            Completion::Unknown => GENERIC_FAILURE,
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
