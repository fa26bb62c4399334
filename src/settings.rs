//! Typed settings
//!
//! [`DeclfmtConfig`] holds configuration as loaded: category names and modifiers are
//! strings. [`Settings`] is the checked form the processor runs with. Invalid values
//! are rejected here, before any file is touched.

use declfmt_config::DeclfmtConfig;
use declfmt_parser::java::transforms::{UnknownVisibility, Visibility};
use declfmt_parser::java::{CategoryOrder, SortError, SortOptions};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("sort.order: {0}")]
    Category(#[from] SortError),
    #[error("visibility.default: {0}")]
    Visibility(#[from] UnknownVisibility),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub sort: SortOptions,
    pub visibility: Visibility,
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub fail_fast: bool,
}

impl Settings {
    pub fn from_config(config: &DeclfmtConfig) -> Result<Self, SettingsError> {
        let order = CategoryOrder::from_names(&config.sort.order)?;
        Ok(Settings {
            sort: SortOptions {
                order,
                enum_constants: config.sort.enum_constants,
            },
            visibility: config.visibility.default.parse()?,
            root: config.files.root.clone(),
            extensions: config.files.extensions.clone(),
            fail_fast: config.files.fail_fast,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use declfmt_config::{load_defaults, Loader};

    #[test]
    fn defaults_match_built_in_options() {
        let settings = Settings::from_config(&load_defaults().unwrap()).unwrap();
        assert_eq!(settings.sort, SortOptions::default());
        assert_eq!(settings.visibility, Visibility::Public);
        assert_eq!(settings.extensions, ["java", "py"]);
    }

    #[test]
    fn rejects_unknown_category() {
        let config = Loader::new()
            .set_override("sort.order", vec!["constant", "fields"])
            .unwrap()
            .build()
            .unwrap();
        let err = Settings::from_config(&config).unwrap_err();
        assert_eq!(err.to_string(), "sort.order: unknown category 'fields'");
    }

    #[test]
    fn rejects_unknown_visibility() {
        let config = Loader::new()
            .set_override("visibility.default", "internal")
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(
            Settings::from_config(&config),
            Err(SettingsError::Visibility(UnknownVisibility(name))) if name == "internal"
        ));
    }
}
