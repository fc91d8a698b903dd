//! Compiled highlight queries and the capture stream they produce.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Query, QueryCursor, Tree};

use crate::capture::Capture;
use crate::class::TokenClass;
use crate::error::HighlightError;
use crate::language::SupportedLanguage;

/// A Tree-sitter highlight query whose capture names all map onto the class
/// table.
///
/// Capture names are checked once when the query is compiled, so running
/// the query can never produce an unknown label.
pub struct HighlightQuery {
    query: Query,
    classes: Vec<TokenClass>,
    language: SupportedLanguage,
}

impl HighlightQuery {
    /// Compiles the bundled highlight query for `language`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails to compile or uses a capture name
    /// outside the class table.
    pub fn bundled(language: SupportedLanguage) -> Result<Self, HighlightError> {
        Self::new(language, language.highlight_query())
    }

    /// Compiles `source` against the grammar of `language`.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::QueryCompile`] if Tree-sitter rejects the
    /// query and [`HighlightError::UnknownCaptureClass`] if any capture name
    /// has no entry in the class table.
    pub fn new(language: SupportedLanguage, source: &str) -> Result<Self, HighlightError> {
        let query = Query::new(&language.tree_sitter_language(), source)
            .map_err(|err| HighlightError::query_compile(language, err.to_string()))?;
        let classes = query
            .capture_names()
            .iter()
            .map(|name| TokenClass::from_capture_label(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            query,
            classes,
            language,
        })
    }

    /// Returns the language the query was compiled for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Runs the query over `tree` and returns its captures in engine order.
    ///
    /// The order is not adjusted: captures arrive with non-decreasing start
    /// offsets and may repeat a node matched by several patterns.
    #[must_use]
    pub fn captures(&self, tree: &Tree, source: &str) -> Vec<Capture> {
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.captures(&self.query, tree.root_node(), source.as_bytes());
        let mut captures = Vec::new();
        while let Some((query_match, index)) = matches.next() {
            let Some(capture) = query_match.captures.get(*index) else {
                continue;
            };
            let Some(class) = usize::try_from(capture.index)
                .ok()
                .and_then(|slot| self.classes.get(slot))
            else {
                continue;
            };
            captures.push(Capture::new(capture.node.byte_range(), *class));
        }
        captures
    }
}

impl std::fmt::Debug for HighlightQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighlightQuery")
            .field("language", &self.language)
            .field("classes", &self.classes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SupportedLanguage::Rust)]
    #[case(SupportedLanguage::Python)]
    fn bundled_queries_compile(#[case] language: SupportedLanguage) {
        let query = HighlightQuery::bundled(language).expect("bundled query");
        assert_eq!(query.language(), language);
    }

    #[test]
    fn query_with_unknown_capture_is_rejected() {
        let result = HighlightQuery::new(SupportedLanguage::Rust, "(identifier) @property");
        assert!(matches!(
            result,
            Err(HighlightError::UnknownCaptureClass { ref label }) if label == "property"
        ));
    }

    #[test]
    fn malformed_query_is_rejected() {
        let result = HighlightQuery::new(SupportedLanguage::Rust, "(not_a_node) @keyword");
        assert!(matches!(result, Err(HighlightError::QueryCompile { .. })));
    }

    #[test]
    fn captures_follow_source_order() {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&SupportedLanguage::Rust.tree_sitter_language())
            .expect("grammar");
        let source = "let a = 1;";
        let tree = parser.parse(source, None).expect("tree");
        let query = HighlightQuery::bundled(SupportedLanguage::Rust).expect("query");

        let captures = query.captures(&tree, source);
        let starts: Vec<usize> = captures.iter().map(Capture::start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
        assert_eq!(
            captures.first().map(Capture::class),
            Some(TokenClass::Keyword)
        );
    }
}
