//! ```text
//! statement_part ::=
//!     { statement }
//! ```
//!
//! Repetition over the statement alternatives this slice recognizes.

use super::concurrent_signal_assignment;
use super::error::ClassifyError;
use super::next_statement;
use super::utils;
use crate::vhdl::token::Token;

pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    utils::detect_repeated(statement, cursor, tokens)
}

fn statement(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let advanced = next_statement::detect(cursor, tokens)?;
    if advanced != cursor {
        return Ok(advanced);
    }
    concurrent_signal_assignment::detect(cursor, tokens)
}
