// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawn a child, capture both streams, and normalize how it ended.

use std::ffi::OsStr;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::failure::Failure;
use crate::platform::{HostPlatform, SystemPlatform};
use crate::result::ExecResult;
use crate::shell::{join_fragments, ShellConfig};
use crate::status::Completion;

/// Runs child processes to completion and captures their output.
///
/// Holds the host-platform capability consulted when `run_shell` picks a
/// default shell. Stateless otherwise: one executor can serve any number
/// of concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Executor<H: HostPlatform = SystemPlatform> {
    host: H,
}

impl Executor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: HostPlatform> Executor<H> {
    /// Executor that asks `host` for the platform instead of the OS.
    pub fn with_host(host: H) -> Self {
        Self { host }
    }

    /// Run `executable` with `args`, no shell involved.
    ///
    /// The executable is looked up on `PATH` the way the OS does it. Each
    /// argument reaches the child verbatim.
    pub fn run<I, S>(&self, executable: &str, args: I) -> ExecResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(executable);
        command.args(args);
        execute(command, executable)
    }

    /// Join `fragments` with single spaces and run the line through a shell.
    ///
    /// Empty `shell` or `shell_flag` select the platform defaults (see
    /// [`ShellConfig`]). The shell receives exactly two arguments: the flag
    /// and the joined line.
    pub fn run_shell<I, S>(&self, shell: &str, shell_flag: &str, fragments: I) -> ExecResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let config = ShellConfig::resolve(shell, shell_flag, &self.host);
        self.run_with(&config, fragments)
    }

    /// Like [`run_shell`](Self::run_shell) with an already resolved config.
    pub fn run_with<I, S>(&self, config: &ShellConfig, fragments: I) -> ExecResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = join_fragments(fragments);
        let mut command = Command::new(config.program());
        command.arg(config.flag()).arg(&line);
        execute(command, config.program())
    }
}

/// Run `executable` with `args` on the real host.
pub fn run<I, S>(executable: &str, args: I) -> ExecResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Executor::new().run(executable, args)
}

/// Run the joined `fragments` through `shell shell_flag "<line>"` on the real host.
pub fn run_shell<I, S>(shell: &str, shell_flag: &str, fragments: I) -> ExecResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Executor::new().run_shell(shell, shell_flag, fragments)
}

/// Spawn `command`, wait for it, and fold every outcome into a result.
fn execute(mut command: Command, program: &str) -> ExecResult {
    let start = Instant::now();
    let args: Vec<_> = command
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let span = tracing::info_span!(
        "subproc.exec",
        program = %program,
        args = ?args,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );
    let _guard = span.enter();

    // No input for the child; both outputs captured in full.
    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    // `output` drains both pipes while waiting, so a chatty child cannot
    // block on a full stderr pipe.
    let result = match command.output() {
        Ok(output) => {
            let completion = Completion::from_status(output.status);
            ExecResult::from_capture(
                &output.stdout,
                &output.stderr,
                completion.exit_code(),
                || Failure::completed(program, completion).to_string(),
            )
        }
        Err(source) => {
            let failure = Failure::launch(program, source);
            tracing::debug!(error = %failure, "launch failed");
            ExecResult::from_capture(b"", b"", failure.exit_code(), || failure.to_string())
        }
    };

    span.record("exit_code", result.exit_code);
    span.record("duration_ms", start.elapsed().as_millis() as u64);
    result
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
