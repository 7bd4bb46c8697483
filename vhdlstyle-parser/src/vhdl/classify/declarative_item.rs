//! ```text
//! declarative_item ::=
//!     subprogram_instantiation_declaration
//!   | signal_declaration
//!   | constant_declaration
//! ```
//!
//! Alternation dispatcher. Alternatives are tried in the declared order and
//! the first whose detect advances the cursor wins; there is no backtracking
//! once an alternative starts consuming, so each alternative's lookahead must
//! select unambiguously.

use super::constant_declaration;
use super::error::ClassifyError;
use super::signal_declaration;
use super::subprogram_instantiation;
use crate::vhdl::token::Token;

pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let advanced = subprogram_instantiation::detect(cursor, tokens)?;
    if advanced != cursor {
        return Ok(advanced);
    }
    let advanced = signal_declaration::detect(cursor, tokens)?;
    if advanced != cursor {
        return Ok(advanced);
    }
    let advanced = constant_declaration::detect(cursor, tokens)?;
    if advanced != cursor {
        return Ok(advanced);
    }
    Ok(cursor)
}
