/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a catalog for a locale.
///
/// Malformed individual records are not errors; the builder drops them and
/// keeps going.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no translations available for locale {locale}")]
    LocaleNotFound { locale: String },

    #[error("parse error in {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not serialize configuration for {}: {source}", .path.display())]
    TomlWrite {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}
