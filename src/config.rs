//! TOML configuration for the demonstration run.
//!
//! Every key is optional; a missing file argument means `Config::default()`.
//!
//! ```toml
//! output = "compact"
//!
//! [abstract_factory]
//! families = ["windows", "mac"]
//!
//! [factory_method]
//! families = ["windows", "web"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::family::Family;
use crate::output::OutputStyle;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputStyle,
    pub abstract_factory: AbstractFactoryConfig,
    pub factory_method: FactoryMethodConfig,
}

/// Families to build an `Application` for, in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AbstractFactoryConfig {
    pub families: Vec<Family>,
}

impl Default for AbstractFactoryConfig {
    fn default() -> Self {
        Self {
            families: vec![Family::Windows, Family::Mac],
        }
    }
}

/// Families to build a `DialogApplication` for, in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryMethodConfig {
    pub families: Vec<Family>,
}

impl Default for FactoryMethodConfig {
    fn default() -> Self {
        Self {
            families: vec![Family::Windows, Family::Web],
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        log::info!("config: loaded {}", path.display());
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn defaults_match_reference_run() {
        let config = Config::default();
        assert_eq!(config.output, OutputStyle::Message);
        assert_eq!(
            config.abstract_factory.families,
            vec![Family::Windows, Family::Mac]
        );
        assert_eq!(
            config.factory_method.families,
            vec![Family::Windows, Family::Web]
        );
    }

    #[test]
    fn full_config_parses() {
        let text = r#"
            output = "compact"

            [abstract_factory]
            families = ["mac"]

            [factory_method]
            families = ["web", "mac"]
        "#;
        let config = Config::parse(text).unwrap();
        assert_eq!(config.output, OutputStyle::Compact);
        assert_eq!(config.abstract_factory.families, vec![Family::Mac]);
        assert_eq!(
            config.factory_method.families,
            vec![Family::Web, Family::Mac]
        );
    }

    #[test]
    fn missing_section_keeps_its_default() {
        let config = Config::parse("[factory_method]\nfamilies = []\n").unwrap();
        assert!(config.factory_method.families.is_empty());
        assert_eq!(
            config.abstract_factory.families,
            vec![Family::Windows, Family::Mac]
        );
    }

    #[test]
    fn unknown_family_is_a_parse_error() {
        let err = Config::parse("[abstract_factory]\nfamilies = [\"linux\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn family_names_are_case_insensitive() {
        let text = "[abstract_factory]\nfamilies = [\"Windows\", \"MAC\"]\n\n\
                    [factory_method]\nfamilies = [\"Web\"]\n";
        let config = Config::parse(text).unwrap();
        assert_eq!(
            config.abstract_factory.families,
            vec![Family::Windows, Family::Mac]
        );
        assert_eq!(config.factory_method.families, vec![Family::Web]);
    }

    #[test]
    fn unknown_family_error_names_the_value() {
        let err = Config::parse("[factory_method]\nfamilies = [\"Linux\"]\n").unwrap_err();
        assert!(err.to_string().contains("unknown family: \"Linux\""));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let err = Config::parse("colour = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load(Path::new("/nonexistent/uifactory.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/uifactory.toml"));
    }
}
