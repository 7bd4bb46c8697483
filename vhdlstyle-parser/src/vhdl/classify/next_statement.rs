//! ```text
//! next_statement ::=
//!     [ label : ] next [ loop_label ] [ when condition ] ;
//! ```

use super::condition;
use super::error::ClassifyError;
use super::utils;
use crate::vhdl::token::{Production, Token};

/// Only attempted when `next` appears within the first three significant
/// tokens, which covers the optional label prefix.
pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    if utils::find_in_next_n_tokens("next", 3, cursor, tokens) {
        return classify(cursor, tokens);
    }
    Ok(cursor)
}

pub fn classify(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let mut current = utils::tokenize_label(
        cursor,
        tokens,
        Production::NextStatementLabel,
        Production::NextStatementLabelColon,
    );
    current =
        utils::assign_next_token_required("next", Production::NextStatementKeyword, current, tokens)?;

    if !utils::is_next_token(";", current, tokens) && !utils::is_next_token("when", current, tokens)
    {
        current = utils::assign_next_token(Production::NextStatementLoopLabel, current, tokens);
    }

    if utils::is_next_token("when", current, tokens) {
        current = utils::assign_next_token_required(
            "when",
            Production::NextStatementWhenKeyword,
            current,
            tokens,
        )?;
        current = condition::classify_until(&[";"], current, tokens);
    }

    utils::assign_next_token_required(";", Production::NextStatementSemicolon, current, tokens)
}
