//! Cursor utilities shared by every production classifier.
//!
//! All lookahead skips whitespace and comments; matching is case-insensitive
//! throughout, as VHDL is.

use super::error::ClassifyError;
use crate::vhdl::token::{Production, Token, TokenKind};

/// Index of the next significant token at or after `cursor`.
pub fn next_significant(cursor: usize, tokens: &[Token]) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(cursor)
        .find(|(_, t)| t.is_significant())
        .map(|(i, _)| i)
}

/// Does the next significant token match `value`?
pub fn is_next_token(value: &str, cursor: usize, tokens: &[Token]) -> bool {
    next_significant(cursor, tokens)
        .map(|i| tokens[i].matches(value))
        .unwrap_or(false)
}

/// Do the next significant tokens match `values`, in order?
pub fn are_next_consecutive_tokens(values: &[&str], cursor: usize, tokens: &[Token]) -> bool {
    let mut current = cursor;
    for value in values {
        match next_significant(current, tokens) {
            Some(idx) if tokens[idx].matches(value) => current = idx + 1,
            _ => return false,
        }
    }
    true
}

/// Does `value` occur within the next `n` significant tokens?
///
/// Bounded lookahead windows gate productions whose leading tokens are
/// ambiguous on their own (`next` after an optional label, `is` after a
/// subprogram kind).
pub fn find_in_next_n_tokens(value: &str, n: usize, cursor: usize, tokens: &[Token]) -> bool {
    let mut seen = 0;
    let mut current = cursor;
    while let Some(idx) = next_significant(current, tokens) {
        seen += 1;
        if seen > n {
            return false;
        }
        if tokens[idx].matches(value) {
            return true;
        }
        current = idx + 1;
    }
    false
}

/// Tag the next significant token unconditionally.
///
/// Returns the cursor unchanged at end of stream.
pub fn assign_next_token(tag: Production, cursor: usize, tokens: &mut [Token]) -> usize {
    match next_significant(cursor, tokens) {
        Some(idx) => {
            tokens[idx].production = tag;
            idx + 1
        }
        None => cursor,
    }
}

/// Tag the next significant token, which must match `value`.
pub fn assign_next_token_required(
    value: &str,
    tag: Production,
    cursor: usize,
    tokens: &mut [Token],
) -> Result<usize, ClassifyError> {
    match next_significant(cursor, tokens) {
        Some(idx) if tokens[idx].matches(value) => {
            tokens[idx].production = tag;
            Ok(idx + 1)
        }
        Some(idx) => Err(ClassifyError::missing(
            value,
            Some(&tokens[idx].value),
            idx,
        )),
        None => Err(ClassifyError::missing(value, None, tokens.len())),
    }
}

/// Tag the next significant token only when it matches `value`.
pub fn assign_next_token_if(
    value: &str,
    tag: Production,
    cursor: usize,
    tokens: &mut [Token],
) -> usize {
    match next_significant(cursor, tokens) {
        Some(idx) if tokens[idx].matches(value) => {
            tokens[idx].production = tag;
            idx + 1
        }
        _ => cursor,
    }
}

/// Consume an optional `label :` prefix.
pub fn tokenize_label(
    cursor: usize,
    tokens: &mut [Token],
    label_tag: Production,
    colon_tag: Production,
) -> usize {
    if let Some(first) = next_significant(cursor, tokens) {
        if tokens[first].kind == TokenKind::Identifier {
            if let Some(second) = next_significant(first + 1, tokens) {
                if tokens[second].value == ":" {
                    tokens[first].production = label_tag;
                    tokens[second].production = colon_tag;
                    return second + 1;
                }
            }
        }
    }
    cursor
}

/// Tag significant tokens with `tag` until one of `stops` is next.
///
/// Paren-depth aware: stop values only match at depth zero, and an unmatched
/// closing paren always stops the run (it belongs to an enclosing construct).
/// The stop token itself is not consumed. Returns the cursor at the stop, or
/// past the last token when the stream ends first.
pub fn classify_until(
    stops: &[&str],
    tag: Production,
    cursor: usize,
    tokens: &mut [Token],
) -> usize {
    let mut depth = 0usize;
    let mut current = cursor;
    while let Some(idx) = next_significant(current, tokens) {
        let value = tokens[idx].value.clone();
        if depth == 0 && stops.iter().any(|s| tokens[idx].matches(s)) {
            return idx;
        }
        if value == ")" {
            if depth == 0 {
                return idx;
            }
            depth -= 1;
        } else if value == "(" {
            depth += 1;
        }
        tokens[idx].production = tag;
        current = idx + 1;
    }
    current
}

/// Repetition combinator: loop a sub-production's `detect` while it advances.
///
/// Termination is guaranteed because the loop exits the first time the
/// cursor does not move.
pub fn detect_repeated<F>(
    detect: F,
    cursor: usize,
    tokens: &mut [Token],
) -> Result<usize, ClassifyError>
where
    F: Fn(usize, &mut [Token]) -> Result<usize, ClassifyError>,
{
    let mut current = cursor;
    loop {
        let advanced = detect(current, &mut *tokens)?;
        if advanced == current {
            return Ok(current);
        }
        current = advanced;
    }
}
