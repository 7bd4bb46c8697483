//! The shipped rule catalog.
//!
//! One module per rule family. `all_rules` is the registry surface consumed
//! by the engine and by configuration; rules are addressed by their stable
//! `family_identifier` id.

pub mod concurrent;

use crate::rule::Rule;

/// Every shipped rule, in registration order.
///
/// `indent_width` parameterizes the indentation rule; all other rules are
/// self-contained.
pub fn all_rules(indent_width: usize) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(concurrent::Indentation::new(indent_width)),
        Box::new(concurrent::SpaceAfterAssignment::new()),
        Box::new(concurrent::MultilineAlignment::new()),
        Box::new(concurrent::SpaceBeforeAssignment::new()),
        Box::new(concurrent::LabelRemoval::new()),
        Box::new(concurrent::AssignmentAlignment::new()),
        Box::new(concurrent::CodeAfterElse::new()),
        Box::new(concurrent::CommentAlignment::new()),
    ]
}
