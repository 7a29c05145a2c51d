// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured output of a single child process run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of running one child process to completion.
///
/// `exit_code` is `0` only when the child ran and exited successfully.
/// Whenever it is non-zero, `stderr` is non-empty: either the child's own
/// error output or a description of why the run failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    /// Everything the child wrote to stdout.
    pub stdout: String,
    /// Everything the child wrote to stderr, or the failure description.
    pub stderr: String,
    /// Normalized exit status.
    pub exit_code: u32,
}

impl ExecResult {
    /// Build a result from raw captured streams.
    ///
    /// `failure` is consulted only when the child wrote nothing to stderr
    /// and the exit code is non-zero.
    pub(crate) fn from_capture(
        stdout: &[u8],
        stderr: &[u8],
        exit_code: u32,
        failure: impl FnOnce() -> String,
    ) -> Self {
        let mut stderr = String::from_utf8_lossy(stderr).into_owned();
        if stderr.is_empty() && exit_code != 0 {
            stderr = failure();
        }
        Self {
            stdout: String::from_utf8_lossy(stdout).into_owned(),
            stderr,
            exit_code,
        }
    }

    /// Whether the child ran and exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

impl fmt::Display for ExecResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exit {}, stdout {} bytes, stderr {} bytes",
            self.exit_code,
            self.stdout.len(),
            self.stderr.len()
        )
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
