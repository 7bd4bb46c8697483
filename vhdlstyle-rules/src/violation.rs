//! Violation records.

use serde::Serialize;
use vhdlstyle_parser::vhdl::Token;

/// One detected deviation from a style rule, tied to a specific line at
/// detection time.
///
/// Line numbers are one-based and valid only against the file state the
/// owning rule analyzed; the engine re-runs `analyze` before every `fix`, so
/// no rule ever consumes a stale line number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    line_number: usize,
    tokens: Vec<Token>,
    solution: String,
    /// Target column for alignment fixes; unused by other rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
}

impl Violation {
    pub fn new(line_number: usize, tokens: Vec<Token>, solution: impl Into<String>) -> Self {
        Self {
            line_number,
            tokens,
            solution: solution.into(),
            column: None,
        }
    }

    pub fn with_column(
        line_number: usize,
        tokens: Vec<Token>,
        solution: impl Into<String>,
        column: usize,
    ) -> Self {
        Self {
            line_number,
            tokens,
            solution: solution.into(),
            column: Some(column),
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn solution(&self) -> &str {
        &self.solution
    }

    pub fn column(&self) -> Option<usize> {
        self.column
    }
}
