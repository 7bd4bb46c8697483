//! Per-rule tests for the concurrent family.
//!
//! Each test follows the same shape: analyze yields the expected line
//! numbers, fix yields the expected text, and re-running analyze on the
//! fixed file yields nothing (rules are self-clearing).

use vhdlstyle_parser::vhdl::SourceFile;
use vhdlstyle_rules::rules::concurrent;
use vhdlstyle_rules::Rule;

fn parse(lines: &[&str]) -> SourceFile {
    SourceFile::parse(&lines.join("\n")).expect("fixture classifies")
}

fn texts(file: &SourceFile) -> Vec<String> {
    file.lines().iter().map(|l| l.text().to_string()).collect()
}

fn violation_lines(rule: &dyn Rule) -> Vec<usize> {
    rule.violations().iter().map(|v| v.line_number()).collect()
}

fn assert_self_clearing(rule: &mut dyn Rule, file: &SourceFile) {
    rule.clear_violations();
    rule.analyze(file);
    assert!(
        rule.violations().is_empty(),
        "rule {} still reports after its own fix",
        rule.rule_id()
    );
}

#[test]
fn test_rule_001_indentation() {
    let mut file = parse(&[
        "architecture rtl of top is",
        "begin",
        "    wr_en <= '1';",
        "end architecture;",
    ]);
    let mut rule = concurrent::Indentation::new(2);
    assert_eq!(rule.rule_id(), "concurrent_001");

    rule.analyze(&file);
    assert_eq!(violation_lines(&rule), vec![3]);

    rule.fix(&mut file);
    assert_eq!(file.line(2).text(), "  wr_en <= '1';");
    assert_self_clearing(&mut rule, &file);
}

#[test]
fn test_rule_002_single_space_after_operator() {
    let mut file = parse(&[
        "wr_en <= '1';",
        "rd_en <=    '0';",
        "sel : bar <=  baz;",
        "full <=empty;",
    ]);
    let mut rule = concurrent::SpaceAfterAssignment::new();

    rule.analyze(&file);
    assert_eq!(violation_lines(&rule), vec![2, 3, 4]);

    rule.fix(&mut file);
    assert_eq!(
        texts(&file),
        vec![
            "wr_en <= '1';",
            "rd_en <= '0';",
            "sel : bar <= baz;",
            "full <= empty;",
        ]
    );
    assert_self_clearing(&mut rule, &file);
}

#[test]
fn test_rule_003_continuation_alignment() {
    let mut file = parse(&[
        "out_sig <= a when sel = '1' else",
        "        b;",
        "single <= c;",
    ]);
    let mut rule = concurrent::MultilineAlignment::new();

    rule.analyze(&file);
    assert_eq!(violation_lines(&rule), vec![2]);

    rule.fix(&mut file);
    // anchor is one column past the first line's "<= "
    assert_eq!(file.line(1).text(), "           b;");
    assert_self_clearing(&mut rule, &file);
}

#[test]
fn test_rule_004_space_before_operator() {
    let mut file = parse(&["a <= b;", "c<= d;", "lbl : e<= f;"]);
    let mut rule = concurrent::SpaceBeforeAssignment::new();

    rule.analyze(&file);
    assert_eq!(violation_lines(&rule), vec![2, 3]);

    rule.fix(&mut file);
    assert_eq!(texts(&file), vec!["a <= b;", "c <= d;", "lbl : e <= f;"]);
    assert_self_clearing(&mut rule, &file);
}

#[test]
fn test_rule_005_label_removal() {
    let mut file = parse(&["foo_label : sig <= a when cond else b;", "plain <= c;"]);
    let mut rule = concurrent::LabelRemoval::new();

    rule.analyze(&file);
    assert_eq!(violation_lines(&rule), vec![1]);
    // the offending tokens are the label and its colon
    let tokens = rule.violations()[0].tokens();
    assert_eq!(tokens[0].value, "foo_label");
    assert_eq!(tokens[1].value, ":");

    rule.fix(&mut file);
    assert_eq!(
        texts(&file),
        vec!["sig <= a when cond else b;", "plain <= c;"]
    );
    assert_self_clearing(&mut rule, &file);
}

#[test]
fn test_rule_006_group_alignment_uses_maximum_column() {
    // operators at columns 5, 7, 6: everything aligns to 7
    let mut file = parse(&["sig1 <= a;", "sig_ab <= b;", "sigab <= c;"]);
    let mut rule = concurrent::AssignmentAlignment::new();

    rule.analyze(&file);
    assert_eq!(violation_lines(&rule), vec![1, 3]);

    rule.fix(&mut file);
    assert_eq!(
        texts(&file),
        vec!["sig1   <= a;", "sig_ab <= b;", "sigab  <= c;"]
    );
    assert_self_clearing(&mut rule, &file);
}

#[test]
fn test_rule_006_groups_are_delimited_by_non_concurrent_lines() {
    let mut file = parse(&["sig1 <= a;", "sig_ab <= b;", "", "x <= c;", "yy <= d;"]);
    let mut rule = concurrent::AssignmentAlignment::new();

    rule.analyze(&file);
    assert_eq!(violation_lines(&rule), vec![1, 4]);

    rule.fix(&mut file);
    assert_eq!(
        texts(&file),
        vec!["sig1   <= a;", "sig_ab <= b;", "", "x  <= c;", "yy <= d;"]
    );
    assert_self_clearing(&mut rule, &file);
}

#[test]
fn test_rule_007_code_after_else_is_split() {
    let mut file = parse(&["sig <= a when cond else b;"]);
    let mut rule = concurrent::CodeAfterElse::new();

    rule.analyze(&file);
    assert_eq!(violation_lines(&rule), vec![1]);

    rule.fix(&mut file);
    assert_eq!(texts(&file), vec!["sig <= a when cond else", "b;"]);
    // the split re-derived both lines' predicates
    assert!(file.line(0).predicates().concurrent_begin);
    assert!(!file.line(0).predicates().concurrent_end);
    assert!(!file.line(1).predicates().concurrent_begin);
    assert!(file.line(1).predicates().concurrent_end);
    assert_self_clearing(&mut rule, &file);
}

#[test]
fn test_rule_007_fixes_apply_in_descending_order() {
    let mut file = parse(&["a <= b when c1 else d;", "e <= f when c2 else g;"]);
    let mut rule = concurrent::CodeAfterElse::new();

    rule.analyze(&file);
    assert_eq!(violation_lines(&rule), vec![1, 2]);

    rule.fix(&mut file);
    assert_eq!(
        texts(&file),
        vec![
            "a <= b when c1 else",
            "d;",
            "e <= f when c2 else",
            "g;",
        ]
    );
    assert_self_clearing(&mut rule, &file);
}

#[test]
fn test_rule_007_chained_else_unravels_in_one_fix() {
    let mut file = parse(&["x <= a when c1 else b when c2 else c;"]);
    let mut rule = concurrent::CodeAfterElse::new();

    rule.analyze(&file);
    rule.fix(&mut file);
    assert_eq!(
        texts(&file),
        vec!["x <= a when c1 else", "b when c2 else", "c;"]
    );
    assert_self_clearing(&mut rule, &file);
}

#[test]
fn test_rule_008_comment_alignment() {
    let mut file = parse(&["a <= b; -- first", "abc <= d;   -- second"]);
    let mut rule = concurrent::CommentAlignment::new();

    rule.analyze(&file);
    assert_eq!(violation_lines(&rule), vec![1]);

    rule.fix(&mut file);
    assert_eq!(
        texts(&file),
        vec!["a <= b;     -- first", "abc <= d;   -- second"]
    );
    assert_self_clearing(&mut rule, &file);
}

#[test]
fn test_lines_without_violations_are_untouched() {
    let source = [
        "library ieee;",
        "use ieee.std_logic_1164.all;",
        "",
        "signal s : std_logic;",
    ];
    let mut file = parse(&source);
    for rule in vhdlstyle_rules::rules::all_rules(2).iter_mut() {
        rule.analyze(&file);
        assert!(rule.violations().is_empty(), "{}", rule.rule_id());
        rule.fix(&mut file);
    }
    assert_eq!(texts(&file), source);
}
