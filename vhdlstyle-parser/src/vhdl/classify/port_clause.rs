//! ```text
//! port_clause ::=
//!     port ( port_list ) ;
//! ```
//!
//! Each interface element is `names : [ mode ] subtype`; the mode is the
//! force_mode sub-production. Subtypes may nest parens (constrained arrays),
//! so element consumption is depth-aware.

use super::error::ClassifyError;
use super::force_mode;
use super::utils;
use crate::vhdl::token::{Production, Token};

pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    if utils::is_next_token("port", cursor, tokens) {
        return classify(cursor, tokens);
    }
    Ok(cursor)
}

pub fn classify(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let mut current =
        utils::assign_next_token_required("port", Production::PortClauseKeyword, cursor, tokens)?;
    current =
        utils::assign_next_token_required("(", Production::PortClauseOpenParen, current, tokens)?;
    loop {
        if utils::is_next_token(")", current, tokens) {
            break;
        }
        current = utils::classify_until(&[":"], Production::PortClauseElement, current, tokens);
        current =
            utils::assign_next_token_required(":", Production::PortClauseColon, current, tokens)?;
        current = force_mode::detect(current, tokens);
        current = utils::classify_until(&[";"], Production::PortClauseElement, current, tokens);
        if utils::is_next_token(";", current, tokens) {
            current = utils::assign_next_token_required(
                ";",
                Production::PortClauseSeparator,
                current,
                tokens,
            )?;
        } else {
            break;
        }
    }
    current =
        utils::assign_next_token_required(")", Production::PortClauseCloseParen, current, tokens)?;
    utils::assign_next_token_required(";", Production::PortClauseSemicolon, current, tokens)
}
