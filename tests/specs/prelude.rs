//! Shared helpers for subproc specs.

use std::path::Path;
use std::sync::Once;

pub use subproc::ExecResult;

/// Absolute path of the climock fixture.
pub fn climock_path() -> &'static str {
    env!("CARGO_BIN_EXE_climock")
}

/// Make `climock` resolvable by bare name, for the executor and for
/// shells it spawns. Idempotent; safe to call from every spec.
pub fn climock_on_path() {
    static PREPEND: Once = Once::new();
    PREPEND.call_once(|| {
        let bin_dir = Path::new(climock_path())
            .parent()
            .expect("climock has a parent directory")
            .to_path_buf();
        let existing = std::env::var_os("PATH").unwrap_or_default();
        let dirs = std::iter::once(bin_dir).chain(std::env::split_paths(&existing));
        let joined = std::env::join_paths(dirs).expect("PATH entries are joinable");
        std::env::set_var("PATH", joined);
    });
}

/// Run an executable by name with `climock` on `PATH`.
pub fn run(executable: &str, args: &[&str]) -> Ran {
    climock_on_path();
    Ran(subproc::run(executable, args))
}

/// Run a shell command line with `climock` on `PATH`.
pub fn run_shell(shell: &str, flag: &str, fragments: &[&str]) -> Ran {
    climock_on_path();
    Ran(subproc::run_shell(shell, flag, fragments))
}

/// Fluent assertions over a finished run.
#[derive(Debug)]
pub struct Ran(pub ExecResult);

impl Ran {
    /// Assert exit code 0.
    pub fn passes(self) -> Self {
        assert_eq!(
            self.0.exit_code, 0,
            "expected success, got {}\nstderr: {}",
            self.0, self.0.stderr
        );
        self
    }

    /// Assert a non-zero exit code with something on stderr.
    pub fn fails(self) -> Self {
        assert_ne!(self.0.exit_code, 0, "expected failure, got {}", self.0);
        assert!(!self.0.stderr.is_empty(), "failed run left stderr empty");
        self
    }

    /// Assert an exact exit code.
    pub fn exits(self, code: u32) -> Self {
        assert_eq!(self.0.exit_code, code, "stderr: {}", self.0.stderr);
        self
    }

    pub fn stdout_is(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.0.stdout, expected);
        self
    }

    pub fn stderr_is(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.0.stderr, expected);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.0.stderr.contains(needle),
            "stderr does not contain {needle:?}:\n{}",
            self.0.stderr
        );
        self
    }

    pub fn result(self) -> ExecResult {
        self.0
    }
}
