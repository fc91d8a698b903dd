//! CLI entrypoint for the tinct highlighter.
//!
//! The binary delegates to [`tinct_cli::run`], which loads configuration,
//! installs telemetry, highlights the requested input and writes the tokens
//! to stdout.

use std::io::{self, StderrLock, StdinLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin: StdinLock<'static> = io::stdin().lock();
    let mut stdout: StdoutLock<'static> = io::stdout().lock();
    let mut stderr: StderrLock<'static> = io::stderr().lock();
    tinct_cli::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
