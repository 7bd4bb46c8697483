//! ```text
//! entity_header ::=
//!     [ *formal*_generic_clause ]
//!     [ *formal*_port_clause ]
//! ```
//!
//! Sequential composition of two optional sub-productions; each detect's
//! cursor output feeds the next.

use super::error::ClassifyError;
use super::generic_clause;
use super::port_clause;
use crate::vhdl::token::Token;

pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let current = generic_clause::detect(cursor, tokens)?;
    port_clause::detect(current, tokens)
}
