//! # declfmt
//!
//! Reorders and normalizes member declarations in Java sources written in a strict
//! house style: one declaration per line group, two-space indentation, closers on
//! their own line. Python sources get the block reorder and comment casing.
//!
//! The parsing, composing and transformation passes live in `declfmt-parser`;
//! configuration loading lives in `declfmt-config`. This crate drives them over files:
//!
//! ```text
//! paths --discovery--> files --processor (parse, pass, compose)--> Outcome per file
//! ```
//!
//! - [`settings`]: checked settings built from the loaded configuration
//! - [`dialect`]: Java or Python, picked per file from its extension
//! - [`discovery`]: which files a run touches
//! - [`processor`]: the per-file contract, dry-run and apply modes, batches
//! - [`outline`]: tree and JSON views of a parsed file

pub mod dialect;
pub mod discovery;
pub mod error;
pub mod outline;
pub mod processor;
pub mod settings;

pub use dialect::Dialect;
pub use error::{ProcessError, TransformError};
pub use processor::{BatchReport, Mode, Outcome, Processor};
pub use settings::{Settings, SettingsError};
