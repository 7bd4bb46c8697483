//! ```text
//! subprogram_instantiation_declaration ::=
//!     subprogram_kind identifier is new uninstantiated_subprogram_name [ signature ]
//!         [ generic_map_aspect ] ;
//! ```

use super::error::ClassifyError;
use super::generic_map_aspect;
use super::signature;
use super::subprogram_kind;
use super::utils;
use crate::vhdl::token::{Production, Token};

/// Gated on `is` within three significant tokens of the subprogram kind;
/// everything else starting with `procedure`/`function` is a declaration or
/// body and belongs to other productions.
pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    if subprogram_kind::starts(cursor, tokens) && utils::find_in_next_n_tokens("is", 3, cursor, tokens)
    {
        return classify(cursor, tokens);
    }
    Ok(cursor)
}

pub fn classify(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let mut current = subprogram_kind::classify(cursor, tokens)?;
    current = utils::assign_next_token(
        Production::SubprogramInstantiationIdentifier,
        current,
        tokens,
    );
    current = utils::assign_next_token_required(
        "is",
        Production::SubprogramInstantiationIs,
        current,
        tokens,
    )?;
    current = utils::assign_next_token_required(
        "new",
        Production::SubprogramInstantiationNew,
        current,
        tokens,
    )?;
    current = utils::assign_next_token(Production::SubprogramInstantiationName, current, tokens);
    current = signature::detect(current, tokens)?;
    current = generic_map_aspect::detect(current, tokens)?;
    utils::assign_next_token_required(
        ";",
        Production::SubprogramInstantiationSemicolon,
        current,
        tokens,
    )
}
