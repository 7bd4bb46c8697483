//! ```text
//! condition ::=
//!     expression
//! ```
//!
//! Conditions are not parsed structurally; the whole expression is consumed
//! up to a caller-supplied stop set.

use super::utils;
use crate::vhdl::token::{Production, Token};

pub fn classify_until(stops: &[&str], cursor: usize, tokens: &mut [Token]) -> usize {
    utils::classify_until(stops, Production::ConditionElement, cursor, tokens)
}
