//! The line model.
//!
//! A line owns its raw text (the source of truth), the tokens derived from
//! it, and a set of boolean predicates. Tokens are re-derived on every text
//! change; the predicates that depend on neighboring lines are re-derived by
//! the owning [`SourceFile`](super::file::SourceFile), never cached across a
//! structural change.

use super::lexing;
use super::token::Token;

/// Derived boolean facts about a line, consumed by style rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Predicates {
    /// First line of a concurrent signal assignment.
    pub concurrent_begin: bool,
    /// Any line of a concurrent signal assignment, first and last included.
    pub inside_concurrent: bool,
    /// Last line of a concurrent signal assignment.
    pub concurrent_end: bool,
    /// Empty or whitespace only.
    pub blank: bool,
    /// The first significant content is a comment.
    pub comment_only: bool,
    /// Nesting depth of enclosing declarative regions, used for indentation.
    pub indent_level: usize,
}

/// One physical line of a source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    text: String,
    lower: String,
    tokens: Vec<Token>,
    predicates: Predicates,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lower = text.to_ascii_lowercase();
        let tokens = lexing::tokenize(&text);
        Self {
            text,
            lower,
            tokens,
            predicates: Predicates::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase shadow of the text, for case-insensitive matching.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn predicates(&self) -> &Predicates {
        &self.predicates
    }

    /// First token matching `value` (case-insensitive), if any.
    pub fn find_token(&self, value: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.matches(value))
    }

    /// Replace the whole text, re-deriving tokens.
    ///
    /// Production tags on the previous tokens are dropped; the file-level
    /// predicates are re-derived by the owning SourceFile.
    pub fn update_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.lower = self.text.to_ascii_lowercase();
        self.tokens = lexing::tokenize(&self.text);
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut Vec<Token> {
        &mut self.tokens
    }

    pub(crate) fn predicates_mut(&mut self) -> &mut Predicates {
        &mut self.predicates
    }
}
