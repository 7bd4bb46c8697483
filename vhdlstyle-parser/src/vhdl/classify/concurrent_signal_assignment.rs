//! ```text
//! concurrent_signal_assignment ::=
//!     [ label : ] target <= waveform { when condition else waveform }
//!         [ when condition ] ;
//! ```
//!
//! The production behind the concurrent rule family and the file's
//! concurrent-statement predicates.

use super::condition;
use super::error::ClassifyError;
use super::utils;
use crate::vhdl::token::{Production, Token, TokenKind};

/// The statement starts with `target <=` or `label : target <=` and nothing
/// else; the lookahead checks that exact shape so that other `<=`-bearing
/// constructs (selected assignments, comparisons) never commit here.
pub fn detect(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let mut window = Vec::with_capacity(4);
    let mut current = cursor;
    while window.len() < 4 {
        match utils::next_significant(current, tokens) {
            Some(idx) => {
                window.push(idx);
                current = idx + 1;
            }
            None => break,
        }
    }
    let shape_matches = match window.as_slice() {
        [t1, t2, ..] if tokens[*t1].kind == TokenKind::Identifier && tokens[*t2].value == "<=" => {
            true
        }
        [t1, t2, t3, t4]
            if tokens[*t1].kind == TokenKind::Identifier
                && tokens[*t2].value == ":"
                && tokens[*t3].kind == TokenKind::Identifier
                && tokens[*t4].value == "<=" =>
        {
            true
        }
        _ => false,
    };
    if shape_matches {
        return classify(cursor, tokens);
    }
    Ok(cursor)
}

pub fn classify(cursor: usize, tokens: &mut [Token]) -> Result<usize, ClassifyError> {
    let mut current = utils::tokenize_label(
        cursor,
        tokens,
        Production::ConcurrentLabel,
        Production::ConcurrentLabelColon,
    );
    current = utils::assign_next_token(Production::ConcurrentTarget, current, tokens);
    current =
        utils::assign_next_token_required("<=", Production::ConcurrentAssignOp, current, tokens)?;
    loop {
        current = utils::classify_until(
            &[";", "when", "else"],
            Production::ConcurrentWaveform,
            current,
            tokens,
        );
        if utils::is_next_token("when", current, tokens) {
            current = utils::assign_next_token_required(
                "when",
                Production::ConcurrentWhenKeyword,
                current,
                tokens,
            )?;
            current = condition::classify_until(&[";", "else"], current, tokens);
        }
        if utils::is_next_token("else", current, tokens) {
            current = utils::assign_next_token_required(
                "else",
                Production::ConcurrentElseKeyword,
                current,
                tokens,
            )?;
            continue;
        }
        return utils::assign_next_token_required(
            ";",
            Production::ConcurrentSemicolon,
            current,
            tokens,
        );
    }
}
