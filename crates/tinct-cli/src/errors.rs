//! Error types for the CLI runtime.

use std::io;

use thiserror::Error;
use tinct_highlight::HighlightError;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to configure telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("cannot detect the language of {input}; pass --language")]
    UndetectedLanguage { input: String },
    #[error("failed to read {input}: {source}")]
    ReadInput { input: String, source: io::Error },
    #[error(transparent)]
    Highlight(#[from] HighlightError),
    #[error("failed to serialise token: {0}")]
    SerialiseToken(serde_json::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}
