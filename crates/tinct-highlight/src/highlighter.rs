//! Tree-sitter backed highlighter.
//!
//! [`Highlighter`] owns a parser and a compiled [`HighlightQuery`] for one
//! language. Each call to [`Highlighter::highlight`] parses the text, runs
//! the query and hands the captures to a fresh [`SpanMerger`].

use tracing::debug;

use crate::capture::Capture;
use crate::error::HighlightError;
use crate::language::SupportedLanguage;
use crate::merger::{HighlightOptions, SpanMerger};
use crate::query::HighlightQuery;

/// Token stream produced by one highlighting run.
pub type Tokens<'a> = SpanMerger<'a, std::vec::IntoIter<Capture>>;

/// Anything that can turn text into ordered classified spans.
///
/// Rendering frameworks integrate through this trait so the merger itself
/// stays independent of any particular lexer interface.
pub trait TokenSource {
    /// Starts a highlighting run over `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the run cannot be started, for example because
    /// the source failed to parse.
    fn tokens<'a>(&mut self, source: &'a str) -> Result<Tokens<'a>, HighlightError>;
}

/// Parser, highlight query and options for a single language.
pub struct Highlighter {
    parser: tree_sitter::Parser,
    query: HighlightQuery,
    options: HighlightOptions,
}

impl Highlighter {
    /// Creates a highlighter using the bundled query for `language`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser cannot be initialised or the bundled
    /// query fails to compile.
    pub fn new(language: SupportedLanguage) -> Result<Self, HighlightError> {
        let query = HighlightQuery::bundled(language)?;
        Self::with_query(query, HighlightOptions::default())
    }

    /// Creates a highlighter from a compiled query and run options.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tree-sitter parser cannot be initialised
    /// with the query's grammar.
    pub fn with_query(
        query: HighlightQuery,
        options: HighlightOptions,
    ) -> Result<Self, HighlightError> {
        let language = query.language();
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&language.tree_sitter_language())
            .map_err(|e| HighlightError::parser_init(language, e.to_string()))?;

        Ok(Self {
            parser,
            query,
            options,
        })
    }

    /// Replaces the run options, returning the updated highlighter.
    #[must_use]
    pub fn with_options(mut self, options: HighlightOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the language this highlighter is configured for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.query.language()
    }

    /// Returns the run options.
    #[must_use]
    pub const fn options(&self) -> HighlightOptions {
        self.options
    }

    /// Parses `source` and returns a lazy token stream over it.
    ///
    /// Tokens cover the whole of `source`, including any trailing text the
    /// syntax tree does not span.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::Parse`] if Tree-sitter does not produce a
    /// tree. Errors found while merging are yielded by the stream.
    pub fn highlight<'a>(&mut self, source: &'a str) -> Result<Tokens<'a>, HighlightError> {
        let language = self.language();
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| HighlightError::parse(language))?;
        let captures = self.query.captures(&tree, source);
        debug!(%language, captures = captures.len(), "collected highlight captures");
        Ok(SpanMerger::new(source.as_bytes(), captures, self.options))
    }
}

impl TokenSource for Highlighter {
    fn tokens<'a>(&mut self, source: &'a str) -> Result<Tokens<'a>, HighlightError> {
        self.highlight(source)
    }
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("query", &self.query)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
