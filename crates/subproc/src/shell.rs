// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell selection and command-line assembly for `run_shell`.

use crate::platform::{HostPlatform, Platform};

/// Flag that makes the shell execute its next argument as a command line.
/// Used on every platform when the caller passes an empty flag.
pub const DEFAULT_SHELL_FLAG: &str = "-c";

/// Default shell on POSIX-like hosts.
const POSIX_SHELL: &str = "/bin/sh";

/// Default shell on Windows-class hosts, resolved through `PATH`.
/// Chosen over `cmd.exe` so that [`DEFAULT_SHELL_FLAG`] and POSIX quoting
/// keep working unchanged across platforms.
const WINDOWS_SHELL: &str = "bash";

/// Shell binary and flag used to run a joined command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    program: String,
    flag: String,
}

impl ShellConfig {
    /// Platform defaults: `/bin/sh -c` on POSIX, `bash -c` on Windows.
    pub fn for_platform(platform: Platform) -> Self {
        let program = match platform {
            Platform::Posix => POSIX_SHELL,
            Platform::Windows => WINDOWS_SHELL,
        };
        Self {
            program: program.to_string(),
            flag: DEFAULT_SHELL_FLAG.to_string(),
        }
    }

    /// Resolve caller-supplied values against the host's defaults.
    /// Empty strings select the default.
    pub fn resolve(shell: &str, flag: &str, host: &impl HostPlatform) -> Self {
        Self::for_platform(host.platform())
            .with_program(shell)
            .with_flag(flag)
    }

    /// Override the shell binary. An empty value keeps the current one.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        let program = program.into();
        if !program.is_empty() {
            self.program = program;
        }
        self
    }

    /// Override the shell flag. An empty value keeps the current one.
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        let flag = flag.into();
        if !flag.is_empty() {
            self.flag = flag;
        }
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}

/// Join command fragments into the single line handed to the shell.
///
/// Fragments are separated by exactly one space and are not quoted, so
/// `["ls", "-l"]` and `["ls -l"]` produce the same command line.
pub fn join_fragments<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, fragment) in fragments.into_iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(fragment.as_ref());
    }
    line
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
