//! File processor
//!
//! Every pass goes through the same per-file contract:
//!
//! ```text
//! read -> parse -> apply pass -> compose -> write if the text changed
//! ```
//!
//! The [`Dialect`] of each file decides which parser and composer it goes through.
//!
//! [`Mode`] only decides what happens at the last step, so a dry run exercises exactly
//! the code an apply run would. Files share no state, so a batch is processed on the
//! rayon pool unless it has to stop at the first failure.

use crate::dialect::Dialect;
use crate::error::{ProcessError, TransformError};
use declfmt_parser::java::Pass;
use log::{debug, info, warn};
use rayon::prelude::*;
use similar::TextDiff;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write changed files back.
    Apply,
    /// Report a diff of the change, never write.
    DryRun,
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Written,
    WouldChange { diff: String },
}

impl Outcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

#[derive(Debug, Clone)]
pub struct Processor {
    pass: Pass,
    mode: Mode,
}

impl Processor {
    pub fn new(pass: Pass, mode: Mode) -> Self {
        Self { pass, mode }
    }

    pub fn pass(&self) -> &Pass {
        &self.pass
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Run the pass over source text of `dialect` and return the rendered result.
    pub fn transform_text(&self, source: &str, dialect: Dialect) -> Result<String, TransformError> {
        dialect.transform(&self.pass, source)
    }

    pub fn process_file(&self, path: &Path) -> Result<Outcome, ProcessError> {
        let source = fs::read_to_string(path).map_err(|source| ProcessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dialect = Dialect::of(path);
        let rendered = self
            .transform_text(&source, dialect)
            .map_err(|source| ProcessError::Transform {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("{}: {} pass done ({})", path.display(), self.pass.name(), dialect);

        // Compared against the raw text, so CRLF or trailing spaces count as a change
        if rendered == source {
            return Ok(Outcome::Unchanged);
        }
        match self.mode {
            Mode::DryRun => Ok(Outcome::WouldChange {
                diff: unified_diff(path, &source, &rendered),
            }),
            Mode::Apply => {
                fs::write(path, &rendered).map_err(|source| ProcessError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!("{}: written", path.display());
                Ok(Outcome::Written)
            }
        }
    }

    /// Process every path. With `fail_fast`, files are handled in order and the batch
    /// stops at the first failure; otherwise all files are processed in parallel.
    pub fn process_all(&self, paths: &[PathBuf], fail_fast: bool) -> BatchReport {
        let results = if fail_fast {
            let mut results = Vec::with_capacity(paths.len());
            for path in paths {
                let result = self.process_file(path);
                let failed = result.is_err();
                results.push((path.clone(), result));
                if failed {
                    warn!("{}: stopping after first failure", path.display());
                    break;
                }
            }
            results
        } else {
            paths
                .par_iter()
                .map(|path| (path.clone(), self.process_file(path)))
                .collect()
        };
        BatchReport { results }
    }
}

fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    let name = path.display().to_string();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&name, &name)
        .to_string()
}

/// Per-file results of a batch, in input order.
#[derive(Debug)]
pub struct BatchReport {
    pub results: Vec<(PathBuf, Result<Outcome, ProcessError>)>,
}

impl BatchReport {
    pub fn failures(&self) -> impl Iterator<Item = &ProcessError> {
        self.results.iter().filter_map(|(_, result)| result.as_ref().err())
    }

    pub fn outcomes(&self) -> impl Iterator<Item = (&PathBuf, &Outcome)> {
        self.results
            .iter()
            .filter_map(|(path, result)| result.as_ref().ok().map(|outcome| (path, outcome)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn has_changes(&self) -> bool {
        self.outcomes().any(|(_, outcome)| outcome.is_change())
    }
}
