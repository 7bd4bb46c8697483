//! ```text
//! constant_declaration ::=
//!     constant identifier_list : subtype_indication [ := expression ] ;
//! ```

use super::error::ClassifyError;
use super::utils;
use crate::vhdl::token::{Production, Token};

pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    if utils::is_next_token("constant", cursor, tokens) {
        return classify(cursor, tokens);
    }
    Ok(cursor)
}

pub fn classify(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let mut current =
        utils::assign_next_token_required("constant", Production::ConstantKeyword, cursor, tokens)?;
    current = utils::assign_next_token(Production::ConstantIdentifier, current, tokens);
    while utils::is_next_token(",", current, tokens) {
        current =
            utils::assign_next_token_required(",", Production::ConstantComma, current, tokens)?;
        current = utils::assign_next_token(Production::ConstantIdentifier, current, tokens);
    }
    current = utils::assign_next_token_required(":", Production::ConstantColon, current, tokens)?;
    current = utils::classify_until(&[";", ":="], Production::ConstantSubtype, current, tokens);
    if utils::is_next_token(":=", current, tokens) {
        current =
            utils::assign_next_token_required(":=", Production::ConstantAssign, current, tokens)?;
        current = utils::classify_until(&[";"], Production::ConstantDefault, current, tokens);
    }
    utils::assign_next_token_required(";", Production::ConstantSemicolon, current, tokens)
}
