//! Escape regions: delimiter-marked text that is never classified.
//!
//! When an [`EscapeDelimiters`] pair is configured, the merger hands every
//! unclassified gap to an [`EscapeTracker`]. Once an `open` byte has been
//! seen, captures are suppressed and their text is buffered until a gap
//! containing the `close` byte flushes the whole region as plain text.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

/// A pair of single bytes marking the start and end of an escape region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscapeDelimiters {
    open: u8,
    close: u8,
}

impl EscapeDelimiters {
    /// Creates a delimiter pair.
    #[must_use]
    pub const fn new(open: u8, close: u8) -> Self {
        Self { open, close }
    }

    /// Returns the byte that opens a region.
    #[must_use]
    pub const fn open(self) -> u8 {
        self.open
    }

    /// Returns the byte that closes a region.
    #[must_use]
    pub const fn close(self) -> u8 {
        self.close
    }
}

impl fmt::Display for EscapeDelimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(self.open).escape_default(),
            char::from(self.close).escape_default()
        )
    }
}

/// Error raised when parsing an escape delimiter pair fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("escape delimiters must be exactly two single-byte characters, got '{0}'")]
pub struct EscapeParseError(String);

impl EscapeParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for EscapeDelimiters {
    type Err = EscapeParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.as_bytes() {
            [open, close] if open.is_ascii() && close.is_ascii() => Ok(Self::new(*open, *close)),
            _ => Err(EscapeParseError(input.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Buffering { start: usize },
}

/// Per-run state machine over the gaps between captures.
#[derive(Debug, Clone)]
pub(crate) struct EscapeTracker {
    delimiters: EscapeDelimiters,
    state: State,
}

impl EscapeTracker {
    pub(crate) const fn new(delimiters: EscapeDelimiters) -> Self {
        Self {
            delimiters,
            state: State::Idle,
        }
    }

    /// Returns whether a region is open and captures must be suppressed.
    pub(crate) const fn is_buffering(&self) -> bool {
        matches!(self.state, State::Buffering { .. })
    }

    /// Start of the pending region, if one is open.
    pub(crate) const fn pending_start(&self) -> Option<usize> {
        match self.state {
            State::Idle => None,
            State::Buffering { start } => Some(start),
        }
    }

    /// Feeds the bytes of the gap `range` through the state machine.
    ///
    /// Returns the range to emit as plain text when the gap leaves the
    /// tracker idle: either the gap itself, or the buffered region it
    /// closes. Returns `None` while a region stays open.
    pub(crate) fn advance(&mut self, range: Range<usize>, bytes: &[u8]) -> Option<Range<usize>> {
        let pending = self.pending_start();
        let mut state = self.state;
        for &byte in bytes {
            state = match state {
                State::Idle if byte == self.delimiters.open => State::Buffering {
                    start: pending.unwrap_or(range.start),
                },
                State::Buffering { .. } if byte == self.delimiters.close => State::Idle,
                unchanged => unchanged,
            };
        }

        if state != self.state {
            trace!(
                gap_start = range.start,
                gap_end = range.end,
                buffering = matches!(state, State::Buffering { .. }),
                "escape region transition"
            );
        }
        self.state = state;

        match state {
            State::Buffering { .. } => None,
            State::Idle => Some(pending.unwrap_or(range.start)..range.end),
        }
    }
}
