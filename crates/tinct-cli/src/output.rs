//! Token and language rendering for stdout.

use std::io::Write;

use clap::ValueEnum;
use tinct_highlight::{SupportedLanguage, Token};

use crate::errors::AppError;

/// Output formats for highlighted tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated `offset`, `class` and quoted text.
    #[default]
    Human,
    /// One JSON object per token.
    Json,
}

/// Writes every token on its own line in the requested format.
pub(crate) fn write_tokens<W: Write>(
    format: OutputFormat,
    tokens: &[Token<'_>],
    stdout: &mut W,
) -> Result<(), AppError> {
    for token in tokens {
        match format {
            OutputFormat::Human => writeln!(
                stdout,
                "{}\t{}\t{:?}",
                token.offset(),
                token.class(),
                token.text()
            )
            .map_err(AppError::WriteOutput)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *stdout, token).map_err(AppError::SerialiseToken)?;
                writeln!(stdout).map_err(AppError::WriteOutput)?;
            }
        }
    }
    stdout.flush().map_err(AppError::WriteOutput)
}

/// Writes one line per supported language.
pub(crate) fn write_languages<W: Write>(stdout: &mut W) -> Result<(), AppError> {
    for language in SupportedLanguage::all() {
        writeln!(
            stdout,
            "{language}\taliases: {}\textensions: {}",
            language.aliases().join(", "),
            language.extensions().join(", ")
        )
        .map_err(AppError::WriteOutput)?;
    }
    Ok(())
}
