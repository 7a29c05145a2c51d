// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! climock: deterministic mock executable used by the workspace specs.
//!
//! Writes the given text (no trailing newline) to stdout and/or stderr and
//! exits with the requested status.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "climock", about = "Mock CLI with scripted output and exit status")]
struct Args {
    /// Text to write to stdout
    #[arg(long, value_name = "TEXT")]
    stdout: Option<String>,

    /// Text to write to stderr
    #[arg(long, value_name = "TEXT")]
    stderr: Option<String>,

    /// Exit status
    #[arg(long, value_name = "N", default_value_t = 0)]
    exit: u8,
}

fn emit(mut out: impl Write, text: Option<&str>) -> io::Result<()> {
    if let Some(text) = text {
        out.write_all(text.as_bytes())?;
        out.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let written = emit(io::stdout().lock(), args.stdout.as_deref())
        .and_then(|()| emit(io::stderr().lock(), args.stderr.as_deref()));
    match written {
        Ok(()) => ExitCode::from(args.exit),
        Err(_) => ExitCode::FAILURE,
    }
}
