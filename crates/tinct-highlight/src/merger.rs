//! Merging ordered captures into a contiguous token stream.
//!
//! [`SpanMerger`] walks the capture stream once. Gaps between captures
//! become plain tokens (or are buffered by the escape tracker), captures
//! that start before the current position are dropped, and whatever is left
//! after the last capture is flushed as plain text.

use std::collections::VecDeque;
use std::ops::Range;

use tracing::{debug, trace};

use crate::capture::{Capture, classify};
use crate::class::TokenClass;
use crate::error::HighlightError;
use crate::escape::{EscapeDelimiters, EscapeTracker};
use crate::token::Token;

/// Options for a single highlighting run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    escape: Option<EscapeDelimiters>,
}

impl HighlightOptions {
    /// Creates options with escape handling disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { escape: None }
    }

    /// Marks text between `delimiters` as never classified.
    #[must_use]
    pub const fn with_escape(mut self, delimiters: EscapeDelimiters) -> Self {
        self.escape = Some(delimiters);
        self
    }

    /// Returns the configured escape delimiters, if any.
    #[must_use]
    pub const fn escape(&self) -> Option<EscapeDelimiters> {
        self.escape
    }
}

/// Lazy, single-pass token stream over one source text.
///
/// Yields `Ok(token)` until the source is covered. The first error ends the
/// stream; a fresh merger must be created for every run.
#[derive(Debug)]
pub struct SpanMerger<'a, I> {
    source: &'a [u8],
    captures: I,
    last_pos: usize,
    escape: Option<EscapeTracker>,
    pending: VecDeque<(Range<usize>, TokenClass)>,
    emitted: usize,
    finished: bool,
}

impl<'a, I> SpanMerger<'a, I>
where
    I: Iterator<Item = Capture>,
{
    /// Creates a merger over `source` fed by `captures`.
    #[must_use]
    pub fn new<C>(source: &'a [u8], captures: C, options: HighlightOptions) -> Self
    where
        C: IntoIterator<IntoIter = I>,
    {
        debug!(
            bytes = source.len(),
            escape = ?options.escape(),
            "starting highlight run"
        );
        Self {
            source,
            captures: captures.into_iter(),
            last_pos: 0,
            escape: options.escape().map(EscapeTracker::new),
            pending: VecDeque::new(),
            emitted: 0,
            finished: false,
        }
    }

    fn absorb(&mut self, capture: &Capture) -> Result<(), HighlightError> {
        let len = self.source.len();
        if capture.start() > capture.end() || capture.end() > len {
            return Err(HighlightError::span_out_of_bounds(
                capture.start(),
                capture.end(),
                len,
            ));
        }

        if self.last_pos > capture.start() {
            trace!(
                start = capture.start(),
                end = capture.end(),
                class = %capture.class(),
                last_pos = self.last_pos,
                "discarding overlapping capture"
            );
            return Ok(());
        }

        if self.last_pos < capture.start() {
            self.fill_gap(self.last_pos..capture.start());
        }

        let suppressed = self
            .escape
            .as_ref()
            .is_some_and(EscapeTracker::is_buffering);
        if !suppressed && capture.start() < capture.end() {
            self.pending.push_back((capture.range(), capture.class()));
        }
        self.last_pos = capture.end();
        Ok(())
    }

    fn fill_gap(&mut self, gap: Range<usize>) {
        let plain = match self.escape.as_mut() {
            None => Some(gap),
            Some(tracker) => {
                let bytes = self.source.get(gap.clone()).unwrap_or_default();
                tracker.advance(gap, bytes)
            }
        };
        if let Some(range) = plain {
            self.pending.push_back((range, TokenClass::Plain));
        }
    }

    fn flush(&mut self) {
        let end = self.source.len();
        let tail_start = self
            .escape
            .as_ref()
            .and_then(EscapeTracker::pending_start)
            .unwrap_or(self.last_pos);
        if tail_start < end {
            self.pending.push_back((tail_start..end, TokenClass::Plain));
        }
    }

    fn decode(&self, range: Range<usize>, class: TokenClass) -> Result<Token<'a>, HighlightError> {
        let offset = range.start;
        let bytes = self.source.get(range).unwrap_or_default();
        let text = std::str::from_utf8(bytes).map_err(|err| HighlightError::decode(offset, err))?;
        Ok(Token::new(offset, class, text))
    }

    fn fail(&mut self, error: HighlightError) -> Option<Result<Token<'a>, HighlightError>> {
        debug!(%error, emitted = self.emitted, "highlight run aborted");
        self.finished = true;
        self.pending.clear();
        Some(Err(error))
    }
}

impl<'a, I> Iterator for SpanMerger<'a, I>
where
    I: Iterator<Item = Capture>,
{
    type Item = Result<Token<'a>, HighlightError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((range, class)) = self.pending.pop_front() {
                return match self.decode(range, class) {
                    Ok(token) => {
                        self.emitted += 1;
                        Some(Ok(token))
                    }
                    Err(error) => self.fail(error),
                };
            }
            if self.finished {
                return None;
            }
            match self.captures.next() {
                Some(capture) => {
                    if let Err(error) = self.absorb(&capture) {
                        return self.fail(error);
                    }
                }
                None => {
                    self.flush();
                    self.finished = true;
                    debug!(
                        tokens = self.emitted + self.pending.len(),
                        "highlight run complete"
                    );
                }
            }
        }
    }
}

impl<I> std::iter::FusedIterator for SpanMerger<'_, I> where I: Iterator<Item = Capture> {}

/// Merges classified captures over `source` and collects the whole run.
///
/// # Errors
///
/// Returns the first error encountered; no partial output is returned.
pub fn merge<'a, C>(
    source: &'a str,
    captures: C,
    options: HighlightOptions,
) -> Result<Vec<Token<'a>>, HighlightError>
where
    C: IntoIterator<Item = Capture>,
{
    SpanMerger::new(source.as_bytes(), captures, options).collect()
}

/// Merges raw `(range, label)` captures over `source`.
///
/// Labels are mapped onto classes before merging starts, so an unknown
/// label fails the run without producing any tokens.
///
/// # Errors
///
/// Returns [`HighlightError::UnknownCaptureClass`] for unknown labels, or
/// any error raised while merging.
pub fn merge_labelled<'a, 'l, L>(
    source: &'a str,
    labelled: L,
    options: HighlightOptions,
) -> Result<Vec<Token<'a>>, HighlightError>
where
    L: IntoIterator<Item = (Range<usize>, &'l str)>,
{
    let captures = classify(labelled)?;
    merge(source, captures, options)
}
