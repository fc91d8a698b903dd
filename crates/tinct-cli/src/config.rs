//! Runtime configuration shared by every subcommand.
//!
//! Each field can be set with a flag or an environment variable; flags win.

use clap::Args;
use tinct_highlight::{EscapeDelimiters, HighlightOptions};

use crate::logging::LogFormat;

/// Default tracing filter when neither flag nor environment sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Global options accepted before or after the subcommand.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter expression, for example `tinct_highlight=debug`.
    #[arg(
        long,
        env = "TINCT_LOG_FILTER",
        default_value = DEFAULT_LOG_FILTER,
        global = true
    )]
    log_filter: String,

    /// Diagnostic log format written to stderr.
    #[arg(
        long,
        env = "TINCT_LOG_FORMAT",
        default_value_t = LogFormat::Compact,
        global = true
    )]
    log_format: LogFormat,

    /// Two ASCII bytes opening and closing regions that are never classified.
    #[arg(long, env = "TINCT_ESCAPE", value_name = "XY", global = true)]
    escape: Option<EscapeDelimiters>,
}

impl Config {
    /// Returns the tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the diagnostic log format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the configured escape delimiters, if any.
    #[must_use]
    pub const fn escape(&self) -> Option<EscapeDelimiters> {
        self.escape
    }

    /// Builds the options passed to each highlighting run.
    #[must_use]
    pub fn highlight_options(&self) -> HighlightOptions {
        let options = HighlightOptions::new();
        self.escape
            .map_or(options, |escape| options.with_escape(escape))
    }
}
