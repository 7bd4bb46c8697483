//! ```text
//! subprogram_kind ::=
//!     procedure | function
//! ```

use super::error::ClassifyError;
use super::utils;
use crate::vhdl::token::{Production, Token};

/// Non-consuming check used to gate the subprogram instantiation production.
pub fn starts(cursor: usize, tokens: &[Token]) -> bool {
    utils::is_next_token("procedure", cursor, tokens)
        || utils::is_next_token("function", cursor, tokens)
}

pub fn classify(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    if utils::is_next_token("procedure", cursor, tokens) {
        return utils::assign_next_token_required(
            "procedure",
            Production::SubprogramKindProcedure,
            cursor,
            tokens,
        );
    }
    utils::assign_next_token_required(
        "function",
        Production::SubprogramKindFunction,
        cursor,
        tokens,
    )
}
