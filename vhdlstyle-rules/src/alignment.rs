//! Shared alignment algorithms.
//!
//! Continuation alignment and group alignment share one mechanism: locate a
//! target token, compute its per-line natural column, compute a reference
//! column by a rule-specific policy, and rewrite each line's leading segment
//! so the target lands on the reference exactly. The policies differ:
//!
//!     continuation   fixed offset from the statement's own operator
//!     group          maximum observed column across the group
//!
//! Group alignment takes the maximum, never the mode or first occurrence, so
//! fixes only ever insert whitespace and can never collide with existing
//! tokens.

use vhdlstyle_parser::vhdl::{Line, SourceFile};

/// Column of the first non-blank character, if any.
pub fn first_non_blank_column(text: &str) -> Option<usize> {
    text.char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
}

/// Anchor column for a statement's continuation lines: one column past the
/// `<= ` of the first line.
pub fn continuation_anchor(first_line: &str) -> Option<usize> {
    first_line.find('<').map(|col| col + 3)
}

/// Rewrite leading whitespace so the first non-blank character sits at
/// `column`.
pub fn align_first_character(text: &str, column: usize) -> String {
    format!("{}{}", " ".repeat(column), text.trim_start())
}

/// Natural column of `needle` on a line, via its tokens.
///
/// Matching the token (rather than the raw text) keeps a `--` inside a
/// string literal from being mistaken for a comment delimiter.
pub fn needle_column(line: &Line, needle: &str) -> Option<usize> {
    let wanted = needle.to_ascii_lowercase();
    line.tokens()
        .iter()
        .find(|t| t.value.to_ascii_lowercase().starts_with(&wanted))
        .map(|t| t.column)
}

/// Insert spaces at byte position `at` so the token there moves right by
/// `count` columns.
pub fn insert_spaces(text: &str, at: usize, count: usize) -> String {
    let mut out = String::with_capacity(text.len() + count);
    out.push_str(&text[..at]);
    out.push_str(&" ".repeat(count));
    out.push_str(&text[at..]);
    out
}

/// Contiguous runs of lines sharing the inside-concurrent predicate, as
/// zero-based index groups.
pub fn alignment_groups(file: &SourceFile) -> Vec<Vec<usize>> {
    let mut groups = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    for (index, line) in file.lines().iter().enumerate() {
        if line.predicates().inside_concurrent {
            current.push(index);
        } else if !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Lines of a group whose `needle` is left of the group's reference column,
/// as `(line_index, target_column)` pairs. Lines without the needle do not
/// participate.
pub fn misaligned_lines(file: &SourceFile, group: &[usize], needle: &str) -> Vec<(usize, usize)> {
    let columns: Vec<(usize, usize)> = group
        .iter()
        .filter_map(|&index| needle_column(file.line(index), needle).map(|col| (index, col)))
        .collect();
    let reference = match columns.iter().map(|&(_, col)| col).max() {
        Some(max) => max,
        None => return Vec::new(),
    };
    columns
        .into_iter()
        .filter(|&(_, col)| col != reference)
        .map(|(index, _)| (index, reference))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vhdlstyle_parser::vhdl::SourceFile;

    #[test]
    fn test_align_first_character() {
        assert_eq!(align_first_character("   b;", 7), "       b;");
        assert_eq!(align_first_character("          b;", 7), "       b;");
    }

    #[test]
    fn test_continuation_anchor_points_past_operator() {
        assert_eq!(continuation_anchor("sig <= a when c else"), Some(7));
    }

    #[test]
    fn test_group_reference_is_the_maximum() {
        let file = SourceFile::parse("sig1 <= a;\nsig_ab <= b;\nsigab <= c;").unwrap();
        let groups = alignment_groups(&file);
        assert_eq!(groups, vec![vec![0, 1, 2]]);
        let misaligned = misaligned_lines(&file, &groups[0], "<=");
        assert_eq!(misaligned, vec![(0, 7), (2, 7)]);
    }

    #[test]
    fn test_blank_line_splits_groups() {
        let file = SourceFile::parse("a <= b;\n\nc <= d;").unwrap();
        assert_eq!(alignment_groups(&file), vec![vec![0], vec![2]]);
    }
}
