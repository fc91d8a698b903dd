//! Labelled byte ranges produced by a highlight query.

use std::ops::Range;

use crate::class::TokenClass;
use crate::error::HighlightError;

/// A byte range of the source paired with its highlighting class.
///
/// Captures arrive in the query engine's order: non-decreasing start
/// offsets, possibly with several entries for the same node when more than
/// one query pattern matched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    range: Range<usize>,
    class: TokenClass,
}

impl Capture {
    /// Creates a capture for an already classified range.
    #[must_use]
    pub const fn new(range: Range<usize>, class: TokenClass) -> Self {
        Self { range, class }
    }

    /// Creates a capture from a raw query label.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::UnknownCaptureClass`] if the label is not in
    /// the class table.
    pub fn from_label(range: Range<usize>, label: &str) -> Result<Self, HighlightError> {
        let class = TokenClass::from_capture_label(label)?;
        Ok(Self { range, class })
    }

    /// Returns the byte range covered by the capture.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the start offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.range.start
    }

    /// Returns the end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.range.end
    }

    /// Returns the highlighting class.
    #[must_use]
    pub const fn class(&self) -> TokenClass {
        self.class
    }
}

/// Maps a sequence of `(range, label)` pairs onto captures.
///
/// Every label is checked before anything is returned, so an unknown label
/// fails the whole stream instead of yielding a prefix.
///
/// # Errors
///
/// Returns [`HighlightError::UnknownCaptureClass`] for the first label that
/// is not in the class table.
pub fn classify<'l, I>(labelled: I) -> Result<Vec<Capture>, HighlightError>
where
    I: IntoIterator<Item = (Range<usize>, &'l str)>,
{
    labelled
        .into_iter()
        .map(|(range, label)| Capture::from_label(range, label))
        .collect()
}
