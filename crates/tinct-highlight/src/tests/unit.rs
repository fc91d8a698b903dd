//! Unit tests for tinct-highlight.

use std::ops::Range;

use rstest::rstest;

use crate::{
    Capture, EscapeDelimiters, HighlightError, HighlightOptions, Highlighter, SupportedLanguage,
    Token, TokenClass, merge, merge_labelled,
};

fn triples<'a>(tokens: &[Token<'a>]) -> Vec<(usize, &'static str, &'a str)> {
    tokens
        .iter()
        .map(|token| (token.offset(), token.class().as_str(), token.text()))
        .collect()
}

fn assert_covers(source: &str, tokens: &[Token<'_>]) {
    let rebuilt: String = tokens.iter().map(Token::text).collect();
    assert_eq!(rebuilt, source, "tokens must reproduce the source");

    let mut expected_offset = 0;
    for token in tokens {
        assert_eq!(token.offset(), expected_offset, "tokens must be contiguous");
        assert!(token.end() > token.offset(), "tokens must not be empty");
        expected_offset = token.end();
    }
    assert_eq!(expected_offset, source.len(), "tokens must reach the end");
}

fn angle_brackets() -> HighlightOptions {
    HighlightOptions::new().with_escape(EscapeDelimiters::new(b'<', b'>'))
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn adjacent_captures_leave_no_plain_gaps() {
    let tokens = merge_labelled(
        "a+b",
        [(0..1, "variable"), (1..2, "operator"), (2..3, "variable")],
        HighlightOptions::new(),
    )
    .expect("merge");

    assert_eq!(
        triples(&tokens),
        vec![
            (0, "variable-name", "a"),
            (1, "operator", "+"),
            (2, "variable-name", "b"),
        ]
    );
}

#[test]
fn escape_region_between_captures_is_plain() {
    let tokens = merge_labelled(
        "x<skip>y",
        [(0..1, "variable"), (7..8, "variable")],
        angle_brackets(),
    )
    .expect("merge");

    assert_eq!(
        triples(&tokens),
        vec![
            (0, "variable-name", "x"),
            (1, "plain", "<skip>"),
            (7, "variable-name", "y"),
        ]
    );
}

#[test]
fn capture_inside_escape_region_is_suppressed() {
    let tokens = merge_labelled(
        "x <skip> y",
        [(0..1, "variable"), (3..7, "keyword"), (9..10, "variable")],
        angle_brackets(),
    )
    .expect("merge");

    assert_eq!(
        triples(&tokens),
        vec![
            (0, "variable-name", "x"),
            (1, "plain", " <skip> "),
            (9, "variable-name", "y"),
        ]
    );
}

// =============================================================================
// Overlap Resolution
// =============================================================================

#[test]
fn first_capture_at_a_position_wins() {
    let tokens = merge_labelled(
        "(a)",
        [
            (0..1, "punctuation.bracket"),
            (0..3, "string"),
            (1..2, "variable"),
            (2..3, "punctuation.delimiter"),
        ],
        HighlightOptions::new(),
    )
    .expect("merge");

    assert_eq!(
        triples(&tokens),
        vec![
            (0, "punctuation-bracket", "("),
            (1, "variable-name", "a"),
            (2, "punctuation-delimiter", ")"),
        ]
    );
}

#[test]
fn later_capture_starting_inside_previous_one_is_dropped() {
    let tokens = merge_labelled(
        "abcd",
        [(0..3, "keyword"), (2..4, "number")],
        HighlightOptions::new(),
    )
    .expect("merge");

    assert_eq!(
        triples(&tokens),
        vec![(0, "keyword", "abc"), (3, "plain", "d")]
    );
}

// =============================================================================
// Coverage
// =============================================================================

#[rstest]
#[case("", vec![])]
#[case("plain text only", vec![])]
#[case("a+b", vec![(0..1, TokenClass::VariableName), (2..3, TokenClass::VariableName)])]
#[case("  x  ", vec![(2..3, TokenClass::VariableName)])]
#[case("αβγ δ", vec![(0..2, TokenClass::VariableName), (7..9, TokenClass::VariableName)])]
#[case("xxxx", vec![(0..4, TokenClass::String), (0..2, TokenClass::Keyword), (1..3, TokenClass::Number)])]
fn merged_tokens_cover_source(
    #[case] source: &str,
    #[case] captures: Vec<(Range<usize>, TokenClass)>,
) {
    let captures = captures
        .into_iter()
        .map(|(range, class)| Capture::new(range, class));
    let tokens = merge(source, captures, HighlightOptions::new()).expect("merge");
    assert_covers(source, &tokens);
}

#[rstest]
#[case("a <b> c", vec![0..1, 3..4, 6..7])]
#[case("a <b c", vec![0..1, 3..4, 5..6])]
#[case("<a> <b> <c>", vec![1..2, 5..6, 9..10])]
#[case("a > b < c", vec![0..1, 4..5, 8..9])]
#[case("<<a>>", vec![2..3])]
fn escaped_tokens_cover_source(#[case] source: &str, #[case] ranges: Vec<Range<usize>>) {
    let captures = ranges
        .into_iter()
        .map(|range| Capture::new(range, TokenClass::VariableName));
    let tokens = merge(source, captures, angle_brackets()).expect("merge");
    assert_covers(source, &tokens);
}

#[rstest]
#[case(SupportedLanguage::Rust, "fn add(a: i32, b: i32) -> i32 {\n    a + b // sum\n}\n")]
#[case(SupportedLanguage::Rust, "let s = \"tab\\there\";\nlet c = 'x';\n")]
#[case(SupportedLanguage::Rust, "/* unterminated")]
#[case(SupportedLanguage::Python, "class A:\n    def f(self):\n        return None\n")]
#[case(SupportedLanguage::Python, "print(\"h\\u00e9\", 3.5, True)  # é\n")]
fn highlighted_tokens_cover_source(#[case] language: SupportedLanguage, #[case] source: &str) {
    let mut highlighter = Highlighter::new(language).expect("highlighter");
    let tokens = highlighter
        .highlight(source)
        .expect("start run")
        .collect::<Result<Vec<_>, _>>()
        .expect("tokens");
    assert_covers(source, &tokens);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unknown_label_fails_the_whole_run() {
    let result = merge_labelled(
        "a+b",
        [(0..1, "variable"), (1..2, "operator"), (2..3, "variable.parameter")],
        HighlightOptions::new(),
    );
    assert!(matches!(
        result,
        Err(HighlightError::UnknownCaptureClass { ref label }) if label == "variable.parameter"
    ));
}

#[test]
fn out_of_bounds_capture_fails_the_run() {
    let result = merge_labelled("ab", [(1..5, "keyword")], HighlightOptions::new());
    assert!(matches!(
        result,
        Err(HighlightError::SpanOutOfBounds { start: 1, end: 5, len: 2 })
    ));
}
