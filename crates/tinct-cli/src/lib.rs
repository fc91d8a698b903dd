//! Command-line runtime for the tinct highlighter.
//!
//! The runtime parses arguments, installs telemetry, reads the input text,
//! runs a [`tinct_highlight::Highlighter`] over it and renders the tokens.
//! Streams are injected so tests can drive the whole flow in memory.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use tinct_highlight::{Highlighter, SupportedLanguage, Token, TokenSource};
use tracing::debug;

mod cli;
mod config;
mod errors;
mod logging;
mod output;
mod telemetry;

use cli::{Cli, CliCommand, HighlightArgs};
pub use config::{Config, DEFAULT_LOG_FILTER};
use errors::AppError;
pub use logging::LogFormat;
pub use output::OutputFormat;
pub use telemetry::TelemetryError;

/// Label used in diagnostics when the input comes from stdin.
const STDIN_LABEL: &str = "<stdin>";

/// Runs the CLI against the provided arguments and streams.
///
/// Tokens are written to `stdout` only once the whole run has succeeded, so
/// a failing run never leaves partial output behind. Errors are reported on
/// `stderr` and map to [`ExitCode::FAILURE`].
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => return report_usage(&error, stdout, stderr),
    };

    match execute(&cli, stdin, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            writeln!(stderr, "tinct: {error}").ok();
            ExitCode::FAILURE
        }
    }
}

/// Prints clap output; help and version requests succeed.
fn report_usage<W: Write, E: Write>(
    error: &clap::Error,
    stdout: &mut W,
    stderr: &mut E,
) -> ExitCode {
    let rendered = error.render();
    if error.use_stderr() {
        write!(stderr, "{rendered}").ok();
        ExitCode::FAILURE
    } else {
        write!(stdout, "{rendered}").ok();
        ExitCode::SUCCESS
    }
}

fn execute<R: Read, W: Write>(cli: &Cli, stdin: &mut R, stdout: &mut W) -> Result<(), AppError> {
    telemetry::initialise(&cli.config)?;
    match &cli.command {
        CliCommand::Highlight(args) => highlight(&cli.config, args, stdin, stdout),
        CliCommand::Languages => output::write_languages(stdout),
    }
}

fn highlight<R: Read, W: Write>(
    config: &Config,
    args: &HighlightArgs,
    stdin: &mut R,
    stdout: &mut W,
) -> Result<(), AppError> {
    let input = args.input_path();
    let label = input.map_or_else(|| STDIN_LABEL.to_owned(), |path| path.display().to_string());

    let language = args
        .language
        .or_else(|| input.and_then(SupportedLanguage::from_path))
        .ok_or_else(|| AppError::UndetectedLanguage {
            input: label.clone(),
        })?;

    let source = input
        .map_or_else(|| read_stdin(stdin), fs::read_to_string)
        .map_err(|source| AppError::ReadInput {
            input: label.clone(),
            source,
        })?;

    debug!(input = %label, %language, bytes = source.len(), "highlighting input");

    let mut highlighter = Highlighter::new(language)?.with_options(config.highlight_options());
    let tokens = collect_tokens(&mut highlighter, &source)?;
    output::write_tokens(args.format, &tokens, stdout)
}

fn read_stdin<R: Read>(stdin: &mut R) -> io::Result<String> {
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Drains a token source, failing on the first error.
fn collect_tokens<'a, S: TokenSource>(
    source_tokens: &mut S,
    text: &'a str,
) -> Result<Vec<Token<'a>>, AppError> {
    let tokens = source_tokens.tokens(text)?.collect::<Result<Vec<_>, _>>()?;
    Ok(tokens)
}

#[cfg(test)]
mod tests;
