//! Unit tests for individual grammar productions.
//!
//! Each test drives the whole-stream classifier over a small source and
//! asserts the production tags of the significant tokens, the way the rules
//! and reporters consume them.

use vhdlstyle_parser::vhdl::classify::{self, ClassifyError};
use vhdlstyle_parser::vhdl::lexing;
use vhdlstyle_parser::vhdl::token::{Production, Token};

fn classified(source: &str) -> Vec<Token> {
    let mut tokens = lexing::tokenize(source);
    classify::classify_tokens(&mut tokens).expect("classification succeeds");
    tokens
}

fn tag_of<'a>(tokens: &'a [Token], value: &str) -> Production {
    tokens
        .iter()
        .find(|t| t.matches(value))
        .unwrap_or_else(|| panic!("token '{}' not found", value))
        .production
}

#[test]
fn test_next_statement_minimal() {
    let tokens = classified("next;");
    assert_eq!(tag_of(&tokens, "next"), Production::NextStatementKeyword);
    assert_eq!(tag_of(&tokens, ";"), Production::NextStatementSemicolon);
}

#[test]
fn test_next_statement_with_label_and_condition() {
    let tokens = classified("retry : next when counter = 5;");
    assert_eq!(tag_of(&tokens, "retry"), Production::NextStatementLabel);
    assert_eq!(tag_of(&tokens, ":"), Production::NextStatementLabelColon);
    assert_eq!(tag_of(&tokens, "when"), Production::NextStatementWhenKeyword);
    assert_eq!(tag_of(&tokens, "counter"), Production::ConditionElement);
    assert_eq!(tag_of(&tokens, "5"), Production::ConditionElement);
}

#[test]
fn test_next_statement_with_loop_label() {
    let tokens = classified("next outer_loop;");
    assert_eq!(
        tag_of(&tokens, "outer_loop"),
        Production::NextStatementLoopLabel
    );
}

#[test]
fn test_next_statement_missing_semicolon_is_fatal() {
    let mut tokens = lexing::tokenize("next when a = b");
    let err = classify::classify_tokens(&mut tokens).unwrap_err();
    match err {
        ClassifyError::MissingToken { expected, .. } => assert_eq!(expected, ";"),
    }
}

#[test]
fn test_entity_header_with_force_modes() {
    let source = "\
entity fifo is
  generic (
    depth : integer := 8
  );
  port (
    clk : in std_logic;
    dout : out std_logic_vector(7 downto 0)
  );
end entity fifo;";
    let tokens = classified(source);
    assert_eq!(tag_of(&tokens, "entity"), Production::EntityKeyword);
    assert_eq!(tag_of(&tokens, "fifo"), Production::EntityIdentifier);
    assert_eq!(tag_of(&tokens, "generic"), Production::GenericClauseKeyword);
    assert_eq!(tag_of(&tokens, "port"), Production::PortClauseKeyword);
    assert_eq!(tag_of(&tokens, "in"), Production::ForceModeIn);
    assert_eq!(tag_of(&tokens, "out"), Production::ForceModeOut);
    assert_eq!(tag_of(&tokens, "end"), Production::EntityEnd);
}

#[test]
fn test_entity_without_clauses() {
    let tokens = classified("entity empty is\nend entity;");
    assert_eq!(tag_of(&tokens, "empty"), Production::EntityIdentifier);
    assert_eq!(tag_of(&tokens, ";"), Production::EntitySemicolon);
}

#[test]
fn test_subprogram_instantiation_with_generic_map() {
    let tokens = classified("function add5 is new add generic map (k => 5);");
    assert_eq!(tag_of(&tokens, "function"), Production::SubprogramKindFunction);
    assert_eq!(
        tag_of(&tokens, "add5"),
        Production::SubprogramInstantiationIdentifier
    );
    assert_eq!(tag_of(&tokens, "is"), Production::SubprogramInstantiationIs);
    assert_eq!(tag_of(&tokens, "new"), Production::SubprogramInstantiationNew);
    assert_eq!(
        tag_of(&tokens, "add"),
        Production::SubprogramInstantiationName
    );
    assert_eq!(tag_of(&tokens, "map"), Production::GenericMapMap);
    assert_eq!(tag_of(&tokens, "k"), Production::GenericMapElement);
}

#[test]
fn test_subprogram_instantiation_with_signature() {
    let tokens = classified("procedure swap is new generic_swap [integer];");
    assert_eq!(
        tag_of(&tokens, "procedure"),
        Production::SubprogramKindProcedure
    );
    assert_eq!(tag_of(&tokens, "["), Production::SignatureOpenBracket);
    assert_eq!(tag_of(&tokens, "integer"), Production::SignatureElement);
    assert_eq!(tag_of(&tokens, "]"), Production::SignatureCloseBracket);
}

#[test]
fn test_subprogram_declaration_is_not_an_instantiation() {
    // no `is` within the lookahead window, so nothing commits
    let tokens = classified("function f (x : integer) return integer;");
    assert!(tokens.iter().all(|t| t.production == Production::None));
}

#[test]
fn test_declarative_item_alternation() {
    let source = "\
signal a, b : std_logic := '0';
constant width : integer := 8;
function inc is new add generic map (k => 1);";
    let tokens = classified(source);
    assert_eq!(tag_of(&tokens, "signal"), Production::SignalKeyword);
    assert_eq!(tag_of(&tokens, "a"), Production::SignalIdentifier);
    assert_eq!(tag_of(&tokens, ","), Production::SignalComma);
    assert_eq!(tag_of(&tokens, "std_logic"), Production::SignalSubtype);
    assert_eq!(tag_of(&tokens, "constant"), Production::ConstantKeyword);
    assert_eq!(tag_of(&tokens, "width"), Production::ConstantIdentifier);
    assert_eq!(tag_of(&tokens, "8"), Production::ConstantDefault);
    assert_eq!(tag_of(&tokens, "function"), Production::SubprogramKindFunction);
}

#[test]
fn test_signal_declaration_missing_colon_is_fatal() {
    let mut tokens = lexing::tokenize("signal a");
    assert!(classify::classify_tokens(&mut tokens).is_err());
}

#[test]
fn test_concurrent_assignment_with_conditional_waveform() {
    let tokens = classified("ready : out_sig <= a when cond = '1' else b;");
    assert_eq!(tag_of(&tokens, "ready"), Production::ConcurrentLabel);
    assert_eq!(tag_of(&tokens, "out_sig"), Production::ConcurrentTarget);
    assert_eq!(tag_of(&tokens, "<="), Production::ConcurrentAssignOp);
    assert_eq!(tag_of(&tokens, "when"), Production::ConcurrentWhenKeyword);
    assert_eq!(tag_of(&tokens, "else"), Production::ConcurrentElseKeyword);
    assert_eq!(tag_of(&tokens, "b"), Production::ConcurrentWaveform);
    assert_eq!(tag_of(&tokens, ";"), Production::ConcurrentSemicolon);
}

#[test]
fn test_statement_part_repetition() {
    let tokens = classified("a <= b;\nc <= d;\nnext;");
    let semicolons: Vec<Production> = tokens
        .iter()
        .filter(|t| t.value == ";")
        .map(|t| t.production)
        .collect();
    assert_eq!(
        semicolons,
        vec![
            Production::ConcurrentSemicolon,
            Production::ConcurrentSemicolon,
            Production::NextStatementSemicolon,
        ]
    );
}

#[test]
fn test_unrecognized_text_passes_through_untagged() {
    let tokens = classified("library ieee;\nuse ieee.std_logic_1164.all;");
    assert!(tokens.iter().all(|t| t.production == Production::None));
}
