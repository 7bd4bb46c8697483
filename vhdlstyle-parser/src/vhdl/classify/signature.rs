//! ```text
//! signature ::=
//!     [ [ type_mark { , type_mark } ] [ return type_mark ] ]
//! ```
//!
//! The signature's own brackets are literal; its contents are consumed
//! without further structure.

use super::error::ClassifyError;
use super::utils;
use crate::vhdl::token::{Production, Token};

pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    if utils::is_next_token("[", cursor, tokens) {
        return classify(cursor, tokens);
    }
    Ok(cursor)
}

pub fn classify(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let mut current =
        utils::assign_next_token_required("[", Production::SignatureOpenBracket, cursor, tokens)?;
    current = utils::classify_until(&["]"], Production::SignatureElement, current, tokens);
    utils::assign_next_token_required("]", Production::SignatureCloseBracket, current, tokens)
}
