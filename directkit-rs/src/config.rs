//! User configuration for default matching behaviour.
//!
//! Read from `$DIRECTKIT_CONFIG` when set, otherwise from
//! `<config dir>/directkit/config.toml`. A missing file means defaults.

use crate::error::{DirectKitError, Result};
use crate::search::MatchStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DIRECTKIT_CONFIG";

/// Output format for serialized results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

/// `[matching]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Grammar used when a command gets no `--strategy`.
    pub strategy: MatchStrategy,
    /// Fold Russian word forms in the free-text grammar and minus phrases.
    pub use_word_forms: bool,
}

/// `[output]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub matching: MatchingConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load from the environment override or the default location.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DirectKitError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// `<config dir>/directkit/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("directkit").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.matching.strategy, MatchStrategy::FreeText);
        assert!(!config.matching.use_word_forms);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
            [matching]
            strategy = "exact"
            use_word_forms = true

            [output]
            format = "yaml"
            "#,
        )
        .unwrap();
        assert_eq!(config.matching.strategy, MatchStrategy::Exact);
        assert!(config.matching.use_word_forms);
        assert_eq!(config.output.format, OutputFormat::Yaml);
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse("[matching]\nuse_word_forms = true\n").unwrap();
        assert!(config.matching.use_word_forms);
        assert_eq!(config.matching.strategy, MatchStrategy::FreeText);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_parse_invalid() {
        let err = Config::parse("[matching]\nstrategy = \"fuzzy\"\n").unwrap_err();
        assert!(matches!(err, DirectKitError::TomlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"toml\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Toml);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, DirectKitError::ConfigRead { .. }));
    }
}
