//! ```text
//! generic_clause ::=
//!     generic ( generic_list ) ;
//! ```

use super::error::ClassifyError;
use super::utils;
use crate::vhdl::token::{Production, Token};

pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    if utils::is_next_token("generic", cursor, tokens) {
        return classify(cursor, tokens);
    }
    Ok(cursor)
}

pub fn classify(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let mut current = utils::assign_next_token_required(
        "generic",
        Production::GenericClauseKeyword,
        cursor,
        tokens,
    )?;
    current =
        utils::assign_next_token_required("(", Production::GenericClauseOpenParen, current, tokens)?;
    current = utils::classify_until(&[], Production::GenericClauseElement, current, tokens);
    current =
        utils::assign_next_token_required(")", Production::GenericClauseCloseParen, current, tokens)?;
    utils::assign_next_token_required(";", Production::GenericClauseSemicolon, current, tokens)
}
