//! The file model.
//!
//! A [`SourceFile`] owns an ordered sequence of [`Line`]s and keeps their
//! predicates consistent: every mutation path (text replacement, insertion,
//! deletion) ends in a full predicate re-derivation, so no rule can ever
//! observe a flag that disagrees with the current text. Rendering joins the
//! lines back together; lines untouched by any rule stay byte-identical.

use once_cell::sync::Lazy;
use regex::Regex;

use super::classify::{self, ClassifyError};
use super::line::{Line, Predicates};
use super::token::{Token, TokenKind};

/// Start of a concurrent signal assignment: `target <=` with an optional
/// `label :` prefix.
static CONCURRENT_BEGIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\w+\s*(:\s*\w+\s*)?<=").expect("pattern compiles"));

/// An ordered, index-addressable sequence of lines.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    lines: Vec<Line>,
}

impl SourceFile {
    /// Tokenize, classify, and derive predicates for a whole source text.
    ///
    /// A missing required grammar token is fatal: the file fails
    /// classification and no rule may run against it.
    pub fn parse(source: &str) -> Result<Self, ClassifyError> {
        let mut lines: Vec<Line> = source.split('\n').map(Line::new).collect();

        // The classifier consumes one forward-only stream for the whole
        // file; line boundaries carry no significance beyond the whitespace
        // already between tokens.
        let mut stream: Vec<Token> = Vec::new();
        let mut spans = Vec::with_capacity(lines.len());
        for line in &lines {
            spans.push((stream.len(), line.tokens().len()));
            stream.extend(line.tokens().iter().cloned());
        }
        classify::classify_tokens(&mut stream)?;
        for (line, (start, len)) in lines.iter_mut().zip(spans) {
            *line.tokens_mut() = stream[start..start + len].to_vec();
        }

        let mut file = Self { lines };
        file.rescan();
        Ok(file)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> &Line {
        &self.lines[index]
    }

    /// Replace one line's text; tokens and predicates are re-derived.
    pub fn replace_text(&mut self, index: usize, text: impl Into<String>) {
        self.lines[index].update_text(text);
        self.rescan();
    }

    /// Insert a new line at `index`, shifting subsequent indices by one.
    pub fn insert_line(&mut self, index: usize, text: impl Into<String>) {
        self.lines.insert(index, Line::new(text));
        self.rescan();
    }

    /// Delete the line at `index`, shifting subsequent indices back by one.
    pub fn remove_line(&mut self, index: usize) {
        self.lines.remove(index);
        self.rescan();
    }

    /// Render the file back to text.
    pub fn render(&self) -> String {
        let texts: Vec<&str> = self.lines.iter().map(|l| l.text()).collect();
        texts.join("\n")
    }

    /// Re-derive every line's predicates from current text.
    ///
    /// Pure function of the line sequence; called after every mutation.
    pub fn rescan(&mut self) {
        let mut in_concurrent = false;
        let mut level = 0usize;
        for line in &mut self.lines {
            let mut predicates = Predicates::default();
            predicates.blank = line.text().trim().is_empty();
            predicates.comment_only = !predicates.blank
                && line.tokens().iter().all(|t| !t.is_significant())
                && line.tokens().iter().any(|t| t.kind == TokenKind::Comment);

            let first_word = line
                .tokens()
                .iter()
                .find(|t| t.is_significant())
                .map(|t| t.value.to_ascii_lowercase());
            if first_word.as_deref() == Some("end") {
                level = level.saturating_sub(1);
            }
            predicates.indent_level = level;
            if matches!(
                first_word.as_deref(),
                Some("architecture" | "entity" | "package" | "process" | "case")
            ) {
                level += 1;
            }

            if !in_concurrent && CONCURRENT_BEGIN.is_match(line.text()) {
                predicates.concurrent_begin = true;
                in_concurrent = true;
            }
            if in_concurrent {
                predicates.inside_concurrent = true;
                if line
                    .tokens()
                    .iter()
                    .any(|t| t.kind == TokenKind::Punctuation && t.value == ";")
                {
                    predicates.concurrent_end = true;
                    in_concurrent = false;
                }
            }

            *line.predicates_mut() = predicates;
        }
    }
}
