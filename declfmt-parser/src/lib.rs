//! # declfmt-parser
//!
//! Parser, printer and reorder engine for the house-style Java dialect, plus a smaller
//! block reorder for Python sources.
//!
//! The Java dialect is recognized from indentation and line-ending punctuation alone: there is no
//! lexer and no grammar engine, only an ordered table of line shapes (see
//! [`java::parsing::grammar`]). The contract every consumer relies on is the round trip:
//! composing a freshly parsed tree reproduces the normalized input line for line.
//!
//! File Layout
//!
//! src/
//!   ├── text.rs          Line-level helpers shared by every stage (indentation, sort keys, runs)
//!   ├── testing.rs       Fixture loading for tests
//!   ├── java/
//!   │   ├── ast          Declaration model, categories and errors
//!   │   ├── parsing      Shape table and recursive-descent parser
//!   │   ├── formatting   Composer and the blank-line separation rule
//!   │   ├── sorting      Category-then-name reorder engine
//!   │   └── transforms   Tree passes (visibility, comment casing, switch cases)
//!   └── python/
//!       ├── ast          Class, function and statement nodes
//!       ├── parsing      Indentation parser over logical lines
//!       ├── formatting   Composer and blank-line rule
//!       ├── sorting      Reorder of contiguous class/def runs
//!       └── comments     `#` comment casing
//!
//! A file flows through the stages like so:
//!
//!   lines ──parse──▶ SourceFile ──Pass::apply──▶ SourceFile ──compose──▶ lines
//!
//! Python files take the same path with a `python::Module` in place of the `SourceFile`.

pub mod java;
pub mod python;
pub mod testing;
pub mod text;
