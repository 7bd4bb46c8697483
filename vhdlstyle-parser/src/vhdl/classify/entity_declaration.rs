//! ```text
//! entity_declaration ::=
//!     entity identifier is
//!         entity_header
//!     [ begin
//!         entity_statement_part ]
//!     end [ entity ] [ entity_simple_name ] ;
//! ```

use super::entity_header;
use super::error::ClassifyError;
use super::statement_part;
use super::utils;
use crate::vhdl::token::{Production, Token};

/// `end entity;` also starts with the `entity` keyword, hence the bounded
/// lookahead for `is`.
pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    if utils::is_next_token("entity", cursor, tokens)
        && utils::find_in_next_n_tokens("is", 3, cursor, tokens)
    {
        return classify(cursor, tokens);
    }
    Ok(cursor)
}

pub fn classify(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let mut current =
        utils::assign_next_token_required("entity", Production::EntityKeyword, cursor, tokens)?;
    current = utils::assign_next_token(Production::EntityIdentifier, current, tokens);
    current = utils::assign_next_token_required("is", Production::EntityIs, current, tokens)?;
    current = entity_header::detect(current, tokens)?;
    if utils::is_next_token("begin", current, tokens) {
        current =
            utils::assign_next_token_required("begin", Production::EntityBegin, current, tokens)?;
        current = statement_part::detect(current, tokens)?;
    }
    current = utils::assign_next_token_required("end", Production::EntityEnd, current, tokens)?;
    current = utils::assign_next_token_if("entity", Production::EntityEndKeyword, current, tokens);
    if !utils::is_next_token(";", current, tokens) {
        current = utils::assign_next_token(Production::EntityEndName, current, tokens);
    }
    utils::assign_next_token_required(";", Production::EntitySemicolon, current, tokens)
}
