// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host platform detection for testable default selection

/// Host platform class, as far as shell defaults are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Linux, macOS, the BSDs and anything else with a Bourne shell
    Posix,
    /// Windows-class hosts
    Windows,
}

impl Platform {
    /// Platform of the running process, read at call time.
    pub fn current() -> Self {
        Self::from_family(std::env::consts::FAMILY)
    }

    /// Map a `std::env::consts::FAMILY` value to a platform class.
    pub fn from_family(family: &str) -> Self {
        if family.eq_ignore_ascii_case("windows") {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

/// Something that can tell which platform class the process runs on
pub trait HostPlatform: Clone + Send + Sync {
    fn platform(&self) -> Platform;
}

/// Real host detection
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPlatform;

impl HostPlatform for SystemPlatform {
    fn platform(&self) -> Platform {
        Platform::current()
    }
}

/// Fixed platform for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedPlatform(pub Platform);

impl HostPlatform for FixedPlatform {
    fn platform(&self) -> Platform {
        self.0
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
