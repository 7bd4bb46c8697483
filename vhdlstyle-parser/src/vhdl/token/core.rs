//! Core token type produced by the lexer and tagged by the classifier.

use serde::Serialize;

use super::production::Production;

/// Lexical category of a token, assigned once during tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Reserved word of the language (`signal`, `when`, `else`, ...).
    Keyword,
    /// Basic identifier.
    Identifier,
    /// Numeric, character, string, or bit-string literal.
    Literal,
    /// Delimiters and operators (`<=`, `:`, `;`, `(`, ...).
    Punctuation,
    /// A `--` comment running to the end of the line.
    Comment,
    /// Horizontal whitespace between tokens.
    Whitespace,
}

/// A classified fragment of source text.
///
/// Tokens are produced once per classification pass. Fixes never mutate a
/// token in place; they replace a line's text, and the line re-derives its
/// tokens wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Raw text of the token, byte-identical to the source.
    pub value: String,
    /// Lexical category.
    pub kind: TokenKind,
    /// Grammar production that recognized this token, if any.
    pub production: Production,
    /// Zero-based column of the token's first character on its line.
    pub column: usize,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, column: usize) -> Self {
        Self {
            value: value.into(),
            kind,
            production: Production::None,
            column,
        }
    }

    /// Whitespace and comments are skipped by the classifier's lookahead.
    pub fn is_significant(&self) -> bool {
        !matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Case-insensitive comparison against a token value.
    ///
    /// VHDL keywords and identifiers are case-insensitive; delimiters compare
    /// the same way without harm.
    pub fn matches(&self, value: &str) -> bool {
        self.value.eq_ignore_ascii_case(value)
    }
}
