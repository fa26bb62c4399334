//! Shared configuration loader for declfmt.
//!
//! `defaults/declfmt.default.toml` is embedded into the binary so that the documented
//! defaults and runtime behavior stay in sync. Callers layer project files and command
//! line overrides on top via [`Loader`] before deserializing into [`DeclfmtConfig`].
//!
//! Values are kept as plain strings here; turning category names and modifiers into
//! typed settings (and rejecting bad ones) is left to the caller.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/declfmt.default.toml");

/// Name of the project file picked up from the working directory.
pub const PROJECT_FILE: &str = "declfmt.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DeclfmtConfig {
    pub sort: SortConfig,
    pub visibility: VisibilityConfig,
    pub files: FilesConfig,
}

/// Knobs of the reorder pass.
#[derive(Debug, Clone, Deserialize)]
pub struct SortConfig {
    /// Category names in rank order, e.g. `"static field"`.
    pub order: Vec<String>,
    pub enum_constants: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisibilityConfig {
    pub default: String,
}

/// Which files a run touches when no paths are given, and how failures are handled.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub fail_fast: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DeclfmtConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DeclfmtConfig, ConfigError> {
    Loader::new().build()
}
