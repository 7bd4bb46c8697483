//! The concurrent-assignment rule family.
//!
//! Eight rules spanning four phases:
//!
//! | id  | rule                                             | phase |
//! |-----|--------------------------------------------------|-------|
//! | 001 | leading indentation of the statement's first line| 4     |
//! | 002 | exactly one space after `<=`                     | 2     |
//! | 003 | continuation alignment to the first line's `<=`  | 5     |
//! | 004 | at least one space before `<=`                   | 2     |
//! | 005 | no label on a concurrent assignment              | 1     |
//! | 006 | group alignment of `<=`                          | 5     |
//! | 007 | no code after `else`                             | 1     |
//! | 008 | group alignment of trailing comments             | 5     |

use once_cell::sync::Lazy;
use regex::Regex;

use vhdlstyle_parser::vhdl::{Line, SourceFile, Token, TokenKind};

use crate::alignment;
use crate::rule::Rule;
use crate::violation::Violation;

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("pattern compiles")
}

// `target <= value` with and without a label prefix; the one-space variants
// accept exactly one space after the operator.
static BARE_ASSIGN: Lazy<Regex> = Lazy::new(|| pattern(r#"^\s*\w+\s*<=\s*[\w('"]"#));
static BARE_ASSIGN_ONE_SPACE: Lazy<Regex> = Lazy::new(|| pattern(r#"^\s*\w+\s*<=\s[\w('"]"#));
static LABELED_ASSIGN: Lazy<Regex> = Lazy::new(|| pattern(r#"^\s*\w+\s*:\s*\w+\s*<=\s*[\w('"]"#));
static LABELED_ASSIGN_ONE_SPACE: Lazy<Regex> =
    Lazy::new(|| pattern(r#"^\s*\w+\s*:\s*\w+\s*<=\s[\w('"]"#));

static BARE_BEFORE: Lazy<Regex> = Lazy::new(|| pattern(r"^\s*\w+\s*<="));
static BARE_BEFORE_SPACED: Lazy<Regex> = Lazy::new(|| pattern(r"^\s*\w+\s+<="));
static LABELED_BEFORE: Lazy<Regex> = Lazy::new(|| pattern(r"^\s*\w+\s*:\s*\w+\s*<="));
static LABELED_BEFORE_SPACED: Lazy<Regex> = Lazy::new(|| pattern(r"^\s*\w+\s*:\s*\w+\s+<="));

static AFTER_OPERATOR: Lazy<Regex> = Lazy::new(|| pattern(r"<=\s*"));
static CODE_AFTER_ELSE: Lazy<Regex> = Lazy::new(|| pattern(r"\selse\s+[\w(']"));

/// The `<=` token of a line, for violation reporting.
fn operator_tokens(line: &Line) -> Vec<Token> {
    line.find_token("<=").into_iter().cloned().collect()
}

/// The first significant token of a line.
fn leading_tokens(line: &Line) -> Vec<Token> {
    line.tokens()
        .iter()
        .find(|t| t.is_significant())
        .cloned()
        .into_iter()
        .collect()
}

/// Checks the indentation at the beginning of a concurrent statement.
pub struct Indentation {
    indent_width: usize,
    violations: Vec<Violation>,
}

impl Indentation {
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent_width,
            violations: Vec::new(),
        }
    }
}

impl Rule for Indentation {
    fn family(&self) -> &'static str {
        "concurrent"
    }

    fn identifier(&self) -> &'static str {
        "001"
    }

    fn phase(&self) -> u32 {
        4
    }

    fn solution(&self) -> &str {
        "Ensure proper indentation."
    }

    fn analyze(&mut self, file: &SourceFile) {
        let solution = self.solution().to_string();
        for (index, line) in file.lines().iter().enumerate() {
            let predicates = line.predicates();
            if !predicates.concurrent_begin {
                continue;
            }
            let expected = self.indent_width * predicates.indent_level;
            let actual = alignment::first_non_blank_column(line.text()).unwrap_or(0);
            if actual != expected {
                self.violations.push(Violation::with_column(
                    index + 1,
                    leading_tokens(line),
                    &solution,
                    expected,
                ));
            }
        }
    }

    fn fix(&mut self, file: &mut SourceFile) {
        for violation in std::mem::take(&mut self.violations) {
            let index = violation.line_number() - 1;
            if let Some(column) = violation.column() {
                let fixed = alignment::align_first_character(file.line(index).text(), column);
                file.replace_text(index, fixed);
            }
        }
    }

    fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn clear_violations(&mut self) {
        self.violations.clear();
    }
}

/// Checks there is a single space after the assignment operator.
pub struct SpaceAfterAssignment {
    violations: Vec<Violation>,
}

impl SpaceAfterAssignment {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }
}

impl Rule for SpaceAfterAssignment {
    fn family(&self) -> &'static str {
        "concurrent"
    }

    fn identifier(&self) -> &'static str {
        "002"
    }

    fn phase(&self) -> u32 {
        2
    }

    fn solution(&self) -> &str {
        "Remove all but one space after the <=."
    }

    fn analyze(&mut self, file: &SourceFile) {
        let solution = self.solution().to_string();
        for (index, line) in file.lines().iter().enumerate() {
            if !line.predicates().concurrent_begin {
                continue;
            }
            let text = line.text();
            let violated = if BARE_ASSIGN.is_match(text) {
                !BARE_ASSIGN_ONE_SPACE.is_match(text)
            } else if LABELED_ASSIGN.is_match(text) {
                !LABELED_ASSIGN_ONE_SPACE.is_match(text)
            } else {
                false
            };
            if violated {
                self.violations
                    .push(Violation::new(index + 1, operator_tokens(line), &solution));
            }
        }
    }

    fn fix(&mut self, file: &mut SourceFile) {
        for violation in std::mem::take(&mut self.violations) {
            let index = violation.line_number() - 1;
            let fixed = AFTER_OPERATOR
                .replace(file.line(index).text(), "<= ")
                .into_owned();
            file.replace_text(index, fixed);
        }
    }

    fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn clear_violations(&mut self) {
        self.violations.clear();
    }
}

/// Checks the alignment of multiline concurrent assignments: continuation
/// lines start one column past the first line's `<= `.
pub struct MultilineAlignment {
    violations: Vec<Violation>,
}

impl MultilineAlignment {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }
}

impl Rule for MultilineAlignment {
    fn family(&self) -> &'static str {
        "concurrent"
    }

    fn identifier(&self) -> &'static str {
        "003"
    }

    fn phase(&self) -> u32 {
        5
    }

    fn solution(&self) -> &str {
        "Align first character in row to the column of text one space after the <=."
    }

    fn analyze(&mut self, file: &SourceFile) {
        let solution = self.solution().to_string();
        let mut anchor: Option<usize> = None;
        for (index, line) in file.lines().iter().enumerate() {
            let predicates = line.predicates();
            if !predicates.inside_concurrent {
                continue;
            }
            if predicates.concurrent_begin && predicates.concurrent_end {
                continue;
            }
            if predicates.concurrent_begin {
                anchor = alignment::continuation_anchor(line.text());
            } else if let Some(column) = anchor {
                if predicates.blank {
                    continue;
                }
                if alignment::first_non_blank_column(line.text()) != Some(column) {
                    self.violations.push(Violation::with_column(
                        index + 1,
                        leading_tokens(line),
                        &solution,
                        column,
                    ));
                }
            }
        }
    }

    fn fix(&mut self, file: &mut SourceFile) {
        for violation in std::mem::take(&mut self.violations) {
            let index = violation.line_number() - 1;
            if let Some(column) = violation.column() {
                let fixed = alignment::align_first_character(file.line(index).text(), column);
                file.replace_text(index, fixed);
            }
        }
    }

    fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn clear_violations(&mut self) {
        self.violations.clear();
    }
}

/// Checks there is at least a single space before the assignment operator.
pub struct SpaceBeforeAssignment {
    violations: Vec<Violation>,
}

impl SpaceBeforeAssignment {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }
}

impl Rule for SpaceBeforeAssignment {
    fn family(&self) -> &'static str {
        "concurrent"
    }

    fn identifier(&self) -> &'static str {
        "004"
    }

    fn phase(&self) -> u32 {
        2
    }

    fn solution(&self) -> &str {
        "Add a single space before the <=."
    }

    fn analyze(&mut self, file: &SourceFile) {
        let solution = self.solution().to_string();
        for (index, line) in file.lines().iter().enumerate() {
            if !line.predicates().concurrent_begin {
                continue;
            }
            let text = line.text();
            let violated = if BARE_BEFORE.is_match(text) {
                !BARE_BEFORE_SPACED.is_match(text)
            } else if LABELED_BEFORE.is_match(text) {
                !LABELED_BEFORE_SPACED.is_match(text)
            } else {
                false
            };
            if violated {
                self.violations
                    .push(Violation::new(index + 1, operator_tokens(line), &solution));
            }
        }
    }

    fn fix(&mut self, file: &mut SourceFile) {
        for violation in std::mem::take(&mut self.violations) {
            let index = violation.line_number() - 1;
            let fixed = file.line(index).text().replacen("<=", " <=", 1);
            file.replace_text(index, fixed);
        }
    }

    fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn clear_violations(&mut self) {
        self.violations.clear();
    }
}

/// Checks for labels on concurrent assignments.
pub struct LabelRemoval {
    violations: Vec<Violation>,
}

impl LabelRemoval {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }
}

impl Rule for LabelRemoval {
    fn family(&self) -> &'static str {
        "concurrent"
    }

    fn identifier(&self) -> &'static str {
        "005"
    }

    fn phase(&self) -> u32 {
        1
    }

    fn solution(&self) -> &str {
        "Remove label on concurrent assignment."
    }

    fn analyze(&mut self, file: &SourceFile) {
        let solution = self.solution().to_string();
        for (index, line) in file.lines().iter().enumerate() {
            if !line.predicates().concurrent_begin {
                continue;
            }
            if LABELED_BEFORE.is_match(line.text()) {
                let tokens: Vec<Token> = line
                    .tokens()
                    .iter()
                    .filter(|t| t.is_significant())
                    .take(2)
                    .cloned()
                    .collect();
                self.violations
                    .push(Violation::new(index + 1, tokens, &solution));
            }
        }
    }

    fn fix(&mut self, file: &mut SourceFile) {
        for violation in std::mem::take(&mut self.violations) {
            let index = violation.line_number() - 1;
            let text = file.line(index).text();
            if let Some(position) = text.find(':') {
                let fixed = text[position + 1..].trim_start().to_string();
                file.replace_text(index, fixed);
            }
        }
    }

    fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn clear_violations(&mut self) {
        self.violations.clear();
    }
}

/// Ensures the alignment of `<=` over a group of concurrent statements.
pub struct AssignmentAlignment {
    violations: Vec<Violation>,
}

impl AssignmentAlignment {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }
}

impl Rule for AssignmentAlignment {
    fn family(&self) -> &'static str {
        "concurrent"
    }

    fn identifier(&self) -> &'static str {
        "006"
    }

    fn phase(&self) -> u32 {
        5
    }

    fn solution(&self) -> &str {
        "Inconsistent alignment of \"<=\" in group of lines."
    }

    fn analyze(&mut self, file: &SourceFile) {
        let solution = self.solution().to_string();
        for group in alignment::alignment_groups(file) {
            for (index, target) in alignment::misaligned_lines(file, &group, "<=") {
                self.violations.push(Violation::with_column(
                    index + 1,
                    operator_tokens(file.line(index)),
                    &solution,
                    target,
                ));
            }
        }
    }

    fn fix(&mut self, file: &mut SourceFile) {
        for violation in std::mem::take(&mut self.violations) {
            let index = violation.line_number() - 1;
            let target = match violation.column() {
                Some(column) => column,
                None => continue,
            };
            let line = file.line(index);
            if let Some(current) = alignment::needle_column(line, "<=") {
                if current < target {
                    let fixed = alignment::insert_spaces(line.text(), current, target - current);
                    file.replace_text(index, fixed);
                }
            }
        }
    }

    fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn clear_violations(&mut self) {
        self.violations.clear();
    }
}

/// Checks for code after the `else` keyword.
pub struct CodeAfterElse {
    violations: Vec<Violation>,
}

impl CodeAfterElse {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }
}

impl Rule for CodeAfterElse {
    fn family(&self) -> &'static str {
        "concurrent"
    }

    fn identifier(&self) -> &'static str {
        "007"
    }

    fn phase(&self) -> u32 {
        1
    }

    fn solution(&self) -> &str {
        "Move code after \"else\" to the next line."
    }

    fn analyze(&mut self, file: &SourceFile) {
        let solution = self.solution().to_string();
        for (index, line) in file.lines().iter().enumerate() {
            if !line.predicates().inside_concurrent {
                continue;
            }
            if CODE_AFTER_ELSE.is_match(line.lower()) {
                let tokens: Vec<Token> = line.find_token("else").into_iter().cloned().collect();
                self.violations
                    .push(Violation::new(index + 1, tokens, &solution));
            }
        }
    }

    /// Applied in strictly descending line order so earlier insertions never
    /// invalidate the line numbers not yet processed. Each split re-checks
    /// the inserted remainder, so chained `else` clauses unravel in one fix.
    fn fix(&mut self, file: &mut SourceFile) {
        let violations = std::mem::take(&mut self.violations);
        for violation in violations.iter().rev() {
            let mut index = violation.line_number() - 1;
            loop {
                let split_at = match file.line(index).lower().find(" else") {
                    Some(position) => position + " else".len(),
                    None => break,
                };
                let text = file.line(index).text().to_string();
                let rest = text[split_at..].trim_start().to_string();
                if rest.is_empty() {
                    break;
                }
                file.replace_text(index, text[..split_at].to_string());
                file.insert_line(index + 1, rest);
                index += 1;
            }
        }
    }

    fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn clear_violations(&mut self) {
        self.violations.clear();
    }
}

/// Ensures the alignment of trailing comments over a group of concurrent
/// statements.
pub struct CommentAlignment {
    violations: Vec<Violation>,
}

impl CommentAlignment {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }
}

impl Rule for CommentAlignment {
    fn family(&self) -> &'static str {
        "concurrent"
    }

    fn identifier(&self) -> &'static str {
        "008"
    }

    fn phase(&self) -> u32 {
        5
    }

    fn solution(&self) -> &str {
        "Inconsistent alignment of comments in group of lines."
    }

    fn analyze(&mut self, file: &SourceFile) {
        let solution = self.solution().to_string();
        for group in alignment::alignment_groups(file) {
            for (index, target) in alignment::misaligned_lines(file, &group, "--") {
                let tokens: Vec<Token> = file
                    .line(index)
                    .tokens()
                    .iter()
                    .find(|t| t.kind == TokenKind::Comment)
                    .cloned()
                    .into_iter()
                    .collect();
                self.violations.push(Violation::with_column(
                    index + 1,
                    tokens,
                    &solution,
                    target,
                ));
            }
        }
    }

    fn fix(&mut self, file: &mut SourceFile) {
        for violation in std::mem::take(&mut self.violations) {
            let index = violation.line_number() - 1;
            let target = match violation.column() {
                Some(column) => column,
                None => continue,
            };
            let line = file.line(index);
            if let Some(current) = alignment::needle_column(line, "--") {
                if current < target {
                    let fixed = alignment::insert_spaces(line.text(), current, target - current);
                    file.replace_text(index, fixed);
                }
            }
        }
    }

    fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn clear_violations(&mut self) {
        self.violations.clear();
    }
}
