//! Raw tokenization of VHDL source lines.
//!
//! One line in, one token vector out. The logos lexer recognizes the token
//! alphabet; keyword recognition happens afterwards because VHDL keywords are
//! case-insensitive and share the identifier alphabet. Every byte of the
//! input ends up in exactly one token, so a line can always be reassembled
//! byte-identically from its tokens.

use std::collections::HashSet;

use logos::Logos;
use once_cell::sync::Lazy;

use super::token::{Token, TokenKind};

/// The raw token alphabet.
///
/// Longest match wins, so `<=` beats `<` and `--` beats `-`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"--[^\n]*")]
    Comment,

    // Lines are usually tokenized one at a time, but the classifier also
    // accepts whole-file streams where newlines are plain whitespace.
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("<=")]
    LessThanOrEqual,

    #[token(":=")]
    VariableAssign,

    #[token("=>")]
    Arrow,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    // '0', 'a' and similar enumeration/character literals
    #[regex(r"'[^']'")]
    CharacterLiteral,

    #[regex(r#""[^"]*""#)]
    StringLiteral,

    #[regex(r"[0-9][0-9_]*(\.[0-9_]+)?([eE][-+]?[0-9]+)?")]
    AbstractLiteral,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Word,

    // remaining single-character delimiters and operator parts
    #[regex(r"[<>=&+\-*/|.'!?@#]")]
    Delimiter,
}

/// Reserved words of VHDL, lowercase.
///
/// The subset covering the productions this crate classifies plus the words
/// the style rules look for; unknown words simply stay identifiers.
static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "architecture",
        "begin",
        "case",
        "component",
        "constant",
        "downto",
        "else",
        "end",
        "entity",
        "function",
        "generic",
        "in",
        "is",
        "loop",
        "map",
        "new",
        "next",
        "not",
        "of",
        "others",
        "out",
        "package",
        "port",
        "procedure",
        "process",
        "return",
        "select",
        "signal",
        "subtype",
        "to",
        "type",
        "use",
        "variable",
        "when",
        "while",
        "with",
    ]
    .into_iter()
    .collect()
});

/// True when `word` is a reserved word, regardless of case.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word.to_ascii_lowercase().as_str())
}

/// Tokenize one physical line (no trailing newline).
///
/// Bytes the alphabet does not cover are passed through as punctuation so
/// that rendering stays lossless.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut lexer = RawToken::lexer(text);
    let mut tokens = Vec::new();
    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let value = &text[span.clone()];
        let kind = match raw {
            Ok(RawToken::Comment) => TokenKind::Comment,
            Ok(RawToken::Whitespace) => TokenKind::Whitespace,
            Ok(RawToken::CharacterLiteral)
            | Ok(RawToken::StringLiteral)
            | Ok(RawToken::AbstractLiteral) => TokenKind::Literal,
            Ok(RawToken::Word) => {
                if is_keyword(value) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                }
            }
            Ok(_) | Err(_) => TokenKind::Punctuation,
        };
        tokens.push(Token::new(value, kind, span.start));
    }
    tokens
}
