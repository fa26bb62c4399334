//! The house-style Java dialect: declaration tree, parser, composer and passes.

pub mod ast;
pub mod formatting;
pub mod parsing;
pub mod sorting;
pub mod testing;
pub mod transforms;

pub use ast::{Category, CategoryOrder, Declaration, Kind, SourceFile};
pub use ast::error::{DeclError, ParseError, ParseResult, SortError};
pub use formatting::{compose, compose_file};
pub use parsing::parse;
pub use sorting::SortOptions;
pub use transforms::Pass;
