//! # vhdlstyle-parser
//!
//! Tokenization, line model, and grammar classification for VHDL source.
//!
//! The crate turns raw source text into a [`SourceFile`](vhdl::SourceFile):
//! an ordered sequence of lines, each owning the tokens derived from its text
//! plus a set of boolean predicates (first line of a concurrent statement,
//! inside one, last line of one). The grammar classifier tags tokens with the
//! production that recognized them; style rules live in `vhdlstyle-rules` and
//! consume this crate's output without re-parsing.

pub mod vhdl;
