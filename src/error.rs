//! Errors raised while processing files
//!
//! A [`TransformError`] is what a pass can raise on in-memory text; a [`ProcessError`]
//! adds the file it happened in. Each error stays local to one file.

use crate::dialect::Dialect;
use declfmt_parser::java::{ParseError, SortError};
use declfmt_parser::python;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    PythonParse(#[from] python::ParseError),
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error("the {pass} pass does not apply to {dialect} sources")]
    Unsupported { pass: &'static str, dialect: Dialect },
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", path.display())]
    Transform {
        path: PathBuf,
        #[source]
        source: TransformError,
    },
}

impl ProcessError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ProcessError::Io { path, .. } | ProcessError::Transform { path, .. } => path,
        }
    }
}
