//! Source file discovery
//!
//! Directories are walked with `ignore`, so `.gitignore` and hidden-file rules apply.
//! Files named explicitly are kept even if they would be ignored or have another
//! extension.

use ignore::WalkBuilder;
use log::debug;
use std::path::{Path, PathBuf};

/// Collect the files to process under `paths`, sorted and without duplicates.
pub fn discover<S: AsRef<str>>(
    paths: &[PathBuf],
    extensions: &[S],
) -> Result<Vec<PathBuf>, ignore::Error> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        for entry in WalkBuilder::new(path).build() {
            let entry = entry?;
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if is_file && has_extension(entry.path(), extensions) {
                files.push(entry.into_path());
            }
        }
    }
    files.sort();
    files.dedup();
    debug!("discovered {} file(s)", files.len());
    Ok(files)
}

fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .is_some_and(|ext| extensions.iter().any(|wanted| ext == wanted.as_ref()))
}
