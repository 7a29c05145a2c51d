// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! subproc: run an external program or shell command and capture its output.
//!
//! Every call blocks until the child exits and returns an [`ExecResult`]
//! holding the full stdout, the full stderr and a non-negative exit code.
//! Failures (missing executable, permission denied, non-zero exit) are
//! reported through the result, never as an `Err` or a panic.
//!
//! ```no_run
//! let res = subproc::run("git", ["--version"]);
//! assert_eq!(res.exit_code, 0);
//!
//! let res = subproc::run_shell("", "", ["ls", "-l"]);
//! println!("{}", res.stdout);
//! ```

mod exec;
mod failure;
mod platform;
mod result;
mod shell;
mod status;

pub use exec::{run, run_shell, Executor};
pub use platform::{FixedPlatform, HostPlatform, Platform, SystemPlatform};
pub use result::ExecResult;
pub use shell::{join_fragments, ShellConfig, DEFAULT_SHELL_FLAG};
