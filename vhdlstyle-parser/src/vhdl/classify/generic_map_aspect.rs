//! ```text
//! generic_map_aspect ::=
//!     generic map ( generic_association_list )
//! ```

use super::error::ClassifyError;
use super::utils;
use crate::vhdl::token::{Production, Token};

pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    if utils::are_next_consecutive_tokens(&["generic", "map"], cursor, tokens) {
        return classify(cursor, tokens);
    }
    Ok(cursor)
}

pub fn classify(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let mut current =
        utils::assign_next_token_required("generic", Production::GenericMapGeneric, cursor, tokens)?;
    current = utils::assign_next_token_required("map", Production::GenericMapMap, current, tokens)?;
    current =
        utils::assign_next_token_required("(", Production::GenericMapOpenParen, current, tokens)?;
    current = utils::classify_until(&[], Production::GenericMapElement, current, tokens);
    utils::assign_next_token_required(")", Production::GenericMapCloseParen, current, tokens)
}
