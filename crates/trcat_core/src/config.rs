/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

use crate::catalog::BuildOptions;
use crate::error::ConfigError;
use crate::locale::{system_locale, LocaleId, LocaleSources};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub locale: LocaleConfig,

    #[serde(default)]
    pub translations: TranslationsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Preferred UI language. Empty means "follow the system locale".
    #[serde(default)]
    pub language: String,

    #[serde(default = "default_source_language")]
    pub source_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationsConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_true")]
    pub use_embedded: bool,

    #[serde(default)]
    pub include_unfinished: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: String::new(),
            source_language: default_source_language(),
        }
    }
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            prefix: default_prefix(),
            use_embedded: true,
            include_unfinished: false,
        }
    }
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from("translations")
}

fn default_prefix() -> String {
    "Paint".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, or defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|source| ConfigError::TomlWrite {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The configured language, or the system locale when none is set.
    pub fn effective_language(&self) -> Option<LocaleId> {
        LocaleId::parse(&self.locale.language).or_else(system_locale)
    }

    pub fn sources(&self) -> LocaleSources {
        LocaleSources {
            directory: Some(self.translations.directory.clone()),
            prefix: self.translations.prefix.clone(),
            use_embedded: self.translations.use_embedded,
            source_language: self.locale.source_language.clone(),
            options: BuildOptions {
                include_unfinished: self.translations.include_unfinished,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.translations.prefix, "Paint");
        assert!(config.translations.use_embedded);
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
[locale]
language = "de_DE"

[translations]
directory = "i18n"
include_unfinished = true
"#,
        )
        .unwrap();
        assert_eq!(config.locale.source_language, "en");
        assert_eq!(config.effective_language().unwrap().to_string(), "de_DE");

        let sources = config.sources();
        assert_eq!(sources.directory, Some(PathBuf::from("i18n")));
        assert!(sources.options.include_unfinished);
        assert_eq!(sources.prefix, "Paint");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trcat.toml");

        let mut config = Config::default();
        config.locale.language = "de".into();
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trcat.toml");
        std::fs::write(&path, "[locale\nlanguage = 1").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Toml { .. })));
    }
}
