//! The VHDL source model and grammar classifier.

pub mod classify;
pub mod file;
pub mod lexing;
pub mod line;
pub mod token;

pub use classify::ClassifyError;
pub use file::SourceFile;
pub use line::{Line, Predicates};
pub use token::{Production, Token, TokenKind};
