//! The closed set of highlighting classes and the capture label table.
//!
//! Highlight queries label their captures with dotted names such as
//! `punctuation.bracket`. Those names are mapped onto [`TokenClass`] at the
//! boundary; anything outside the table is rejected rather than passed
//! through as plain text.

use std::fmt;

use serde::Serialize;

use crate::error::HighlightError;

/// Semantic class attached to every emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenClass {
    /// Line and block comments.
    Comment,
    /// Types provided by the language itself.
    BuiltinType,
    /// Separators such as `,` and `;`.
    PunctuationDelimiter,
    /// Function names at definition or call sites.
    FunctionName,
    /// Reserved words.
    Keyword,
    /// Arithmetic, comparison and logical operators.
    Operator,
    /// Parentheses, brackets and braces.
    PunctuationBracket,
    /// Numeric literals.
    Number,
    /// String literals.
    String,
    /// Escape sequences inside strings.
    StringEscape,
    /// Constants provided by the language, such as `true`.
    BuiltinConstant,
    /// Identifiers naming variables.
    VariableName,
    /// Unclassified text between captures.
    Plain,
}

/// Capture labels understood by the class table, in table order.
const CAPTURE_TABLE: &[(&str, TokenClass)] = &[
    ("comment", TokenClass::Comment),
    ("type.builtin", TokenClass::BuiltinType),
    ("punctuation.delimiter", TokenClass::PunctuationDelimiter),
    ("function", TokenClass::FunctionName),
    ("keyword", TokenClass::Keyword),
    ("operator", TokenClass::Operator),
    ("punctuation.bracket", TokenClass::PunctuationBracket),
    ("number", TokenClass::Number),
    ("string", TokenClass::String),
    ("escape", TokenClass::StringEscape),
    ("constant.builtin", TokenClass::BuiltinConstant),
    ("variable", TokenClass::VariableName),
];

impl TokenClass {
    /// Maps a capture label onto its class.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::UnknownCaptureClass`] when the label has no
    /// entry in the class table.
    pub fn from_capture_label(label: &str) -> Result<Self, HighlightError> {
        CAPTURE_TABLE
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, class)| *class)
            .ok_or_else(|| HighlightError::unknown_capture_class(label))
    }

    /// Returns the capture label that maps onto this class, or `None` for
    /// [`TokenClass::Plain`].
    #[must_use]
    pub const fn capture_label(self) -> Option<&'static str> {
        match self {
            Self::Comment => Some("comment"),
            Self::BuiltinType => Some("type.builtin"),
            Self::PunctuationDelimiter => Some("punctuation.delimiter"),
            Self::FunctionName => Some("function"),
            Self::Keyword => Some("keyword"),
            Self::Operator => Some("operator"),
            Self::PunctuationBracket => Some("punctuation.bracket"),
            Self::Number => Some("number"),
            Self::String => Some("string"),
            Self::StringEscape => Some("escape"),
            Self::BuiltinConstant => Some("constant.builtin"),
            Self::VariableName => Some("variable"),
            Self::Plain => None,
        }
    }

    /// Returns the kebab-case display name of this class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::BuiltinType => "builtin-type",
            Self::PunctuationDelimiter => "punctuation-delimiter",
            Self::FunctionName => "function-name",
            Self::Keyword => "keyword",
            Self::Operator => "operator",
            Self::PunctuationBracket => "punctuation-bracket",
            Self::Number => "number",
            Self::String => "string",
            Self::StringEscape => "string-escape",
            Self::BuiltinConstant => "builtin-constant",
            Self::VariableName => "variable-name",
            Self::Plain => "plain",
        }
    }

    /// Returns all classes, with [`TokenClass::Plain`] last.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Comment,
            Self::BuiltinType,
            Self::PunctuationDelimiter,
            Self::FunctionName,
            Self::Keyword,
            Self::Operator,
            Self::PunctuationBracket,
            Self::Number,
            Self::String,
            Self::StringEscape,
            Self::BuiltinConstant,
            Self::VariableName,
            Self::Plain,
        ]
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
