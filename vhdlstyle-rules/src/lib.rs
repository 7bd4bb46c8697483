//! # vhdlstyle-rules
//!
//! Style rules and the engine that runs them.
//!
//! Every rule implements the two-operation [`Rule`] contract: `analyze`
//! scans a classified [`SourceFile`](vhdlstyle_parser::vhdl::SourceFile) and
//! collects [`Violation`]s, `fix` consumes them to mutate the file. Rules
//! carry static identity (family plus numeric identifier) and a phase number;
//! the [`Engine`] executes all enabled rules in ascending phase order, either
//! reporting (analysis-only mode) or correcting (fix mode).

pub mod alignment;
pub mod engine;
pub mod rule;
pub mod rules;
pub mod violation;

pub use engine::{Engine, RuleReport, RuleSetting, Severity};
pub use rule::Rule;
pub use violation::Violation;
