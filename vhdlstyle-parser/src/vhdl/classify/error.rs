//! Classification failures.
//!
//! Distinct from style violations: a violation is always recoverable, a
//! classification failure aborts the file.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// A required grammar token was missing at its mandated position.
    MissingToken {
        expected: String,
        found: Option<String>,
        position: usize,
    },
}

impl ClassifyError {
    pub(crate) fn missing(expected: &str, found: Option<&str>, position: usize) -> Self {
        ClassifyError::MissingToken {
            expected: expected.to_string(),
            found: found.map(str::to_string),
            position,
        }
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::MissingToken {
                expected,
                found: Some(found),
                position,
            } => write!(
                f,
                "classification failed: expected '{}' at token {}, found '{}'",
                expected, position, found
            ),
            ClassifyError::MissingToken {
                expected,
                found: None,
                ..
            } => write!(
                f,
                "classification failed: expected '{}' before end of file",
                expected
            ),
        }
    }
}

impl std::error::Error for ClassifyError {}
