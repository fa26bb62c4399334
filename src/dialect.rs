//! Source dialects
//!
//! A file's dialect is picked from its extension: `.py` files are Python, anything else
//! goes through the Java parser. Python supports the sort and comments passes only.

use crate::error::TransformError;
use declfmt_parser::java::{compose_file, Pass};
use declfmt_parser::python::{comments, compose_module, sorting};
use declfmt_parser::text::{normalize_lines, render_lines};
use declfmt_parser::{java, python};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Java,
    Python,
}

impl Dialect {
    pub fn of(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext == "py" => Dialect::Python,
            _ => Dialect::Java,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Java => "java",
            Dialect::Python => "python",
        }
    }

    pub fn supports(&self, pass: &Pass) -> bool {
        match self {
            Dialect::Java => true,
            Dialect::Python => matches!(pass, Pass::Sort(_) | Pass::Comments),
        }
    }

    /// Parse `source`, apply `pass` and render the result with `\n` line endings.
    pub fn transform(&self, pass: &Pass, source: &str) -> Result<String, TransformError> {
        let lines = normalize_lines(source);
        let composed = match self {
            Dialect::Java => {
                let mut file = java::parse(&lines)?;
                pass.apply(&mut file)?;
                compose_file(&file)
            }
            Dialect::Python => {
                if !self.supports(pass) {
                    return Err(TransformError::Unsupported {
                        pass: pass.name(),
                        dialect: *self,
                    });
                }
                let mut module = python::parse(&lines)?;
                // Category order and enum options have no Python counterpart
                match pass {
                    Pass::Sort(_) => sorting::sort(&mut module),
                    _ => comments::normalize(&mut module),
                }
                compose_module(&module)
            }
        };
        Ok(render_lines(&composed))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
