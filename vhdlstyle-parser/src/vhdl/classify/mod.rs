//! The grammar classifier.
//!
//! One module per production, each exposing the same contract:
//!
//!     detect(cursor, tokens)   lookahead; returns the cursor unchanged when
//!                              the production does not start here, otherwise
//!                              commits and delegates to classify
//!     classify(cursor, tokens) consumes tokens forward, assigning production
//!                              tags, invoking nested productions' classify
//!
//! The cursor is a plain index into the token stream and never moves
//! backward; `classify` always returns a cursor at or past its input.
//! Productions compose three ways:
//!
//!     sequential   thread each sub-production's cursor output into the next
//!                  (entity_header: generic clause then port clause)
//!     repetition   loop a sub-production's detect while it advances
//!                  (statement_part)
//!     alternation  try alternatives in declared order, first match wins, no
//!                  backtracking once a match starts consuming
//!                  (declarative_item)
//!
//! A required token missing at its mandated position is fatal for the
//! enclosing construct: classification aborts with [`ClassifyError`] and the
//! rule engine must not run against the file. Optional tokens are guarded by
//! a lookahead check before consumption.

pub mod concurrent_signal_assignment;
pub mod condition;
pub mod constant_declaration;
pub mod declarative_item;
pub mod entity_declaration;
pub mod entity_header;
pub mod error;
pub mod force_mode;
pub mod generic_clause;
pub mod generic_map_aspect;
pub mod next_statement;
pub mod port_clause;
pub mod signal_declaration;
pub mod signature;
pub mod statement_part;
pub mod subprogram_instantiation;
pub mod subprogram_kind;
pub mod utils;

pub use error::ClassifyError;

use super::token::Token;

/// Classify a whole token stream.
///
/// At each position the recognized constructs are attempted in a fixed
/// priority order; tokens belonging to none of them are left untagged and the
/// cursor moves on, guaranteeing forward progress.
pub fn classify_tokens(tokens: &mut [Token]) -> Result<(), ClassifyError> {
    let mut cursor = 0;
    while let Some(next) = utils::next_significant(cursor, tokens) {
        let advanced = entity_declaration::detect(cursor, tokens)?;
        if advanced != cursor {
            cursor = advanced;
            continue;
        }
        let advanced = declarative_item::detect(cursor, tokens)?;
        if advanced != cursor {
            cursor = advanced;
            continue;
        }
        let advanced = statement_part::detect(cursor, tokens)?;
        if advanced != cursor {
            cursor = advanced;
            continue;
        }
        cursor = next + 1;
    }
    Ok(())
}
