//! Python sources: indentation-delimited blocks, the block reorder and `#` comment casing.
//!
//! Only `class` and `def` blocks are modeled. Everything else is an opaque logical line
//! that is kept verbatim and never moves.

pub mod ast;
pub mod comments;
pub mod formatting;
pub mod parsing;
pub mod sorting;
pub mod testing;

pub use ast::error::{ParseError, ParseResult};
pub use ast::{Block, Kind, Module, Node, Statement};
pub use formatting::compose_module;
pub use parsing::parse;
