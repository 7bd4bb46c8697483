//! ```text
//! signal_declaration ::=
//!     signal identifier_list : subtype_indication [ := expression ] ;
//! ```

use super::error::ClassifyError;
use super::utils;
use crate::vhdl::token::{Production, Token};

pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    if utils::is_next_token("signal", cursor, tokens) {
        return classify(cursor, tokens);
    }
    Ok(cursor)
}

pub fn classify(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let mut current =
        utils::assign_next_token_required("signal", Production::SignalKeyword, cursor, tokens)?;
    current = utils::assign_next_token(Production::SignalIdentifier, current, tokens);
    while utils::is_next_token(",", current, tokens) {
        current = utils::assign_next_token_required(",", Production::SignalComma, current, tokens)?;
        current = utils::assign_next_token(Production::SignalIdentifier, current, tokens);
    }
    current = utils::assign_next_token_required(":", Production::SignalColon, current, tokens)?;
    current = utils::classify_until(&[";", ":="], Production::SignalSubtype, current, tokens);
    if utils::is_next_token(":=", current, tokens) {
        current = utils::assign_next_token_required(":=", Production::SignalAssign, current, tokens)?;
        current = utils::classify_until(&[";"], Production::SignalDefault, current, tokens);
    }
    utils::assign_next_token_required(";", Production::SignalSemicolon, current, tokens)
}
