//! ```text
//! force_mode ::=
//!     in | out
//! ```

use super::utils;
use crate::vhdl::token::{Production, Token};

pub fn detect(cursor: usize, tokens: &mut [Token]) -> usize {
    let current = utils::assign_next_token_if("in", Production::ForceModeIn, cursor, tokens);
    utils::assign_next_token_if("out", Production::ForceModeOut, current, tokens)
}
