//! A hand-rolled lexer and recursive-descent parser for a subset of
//! openCypher, producing a typed AST instead of a concrete syntax tree.
//!
//! ```rust
//! use cypher_front::{Parser, StdReporter};
//!
//! let mut reporter = StdReporter;
//! let parser = Parser::new("MATCH (n:Person) RETURN n.name", &mut reporter);
//! let statement = parser.parse().expect("valid query");
//! ```

mod lexer;
mod limit;
mod position;

pub mod ast;
pub mod semantic;
pub mod visitor;

mod error;
mod parser;

pub use crate::error::{CollectingReporter, Error, Reporter, StdReporter};
pub use crate::lexer::{Lexer, Literal, Token, TokenKind};
pub use crate::limit::LimitTracker;
pub use crate::parser::Parser;
pub use crate::position::Position;
