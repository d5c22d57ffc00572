/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

//! Locale identifiers and locating translation data for them.
//!
//! Translation files are named `<prefix>_<locale>.ts` (for example
//! `Paint_de.ts`). Loading `de_AT` tries `Paint_de_AT.ts`, then the base
//! language `Paint_de.ts`, first on disk and then among the embedded files.

use crate::catalog::{BuildOptions, Catalog};
use crate::embedded;
use crate::error::BuildError;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// A normalized locale identifier: lowercase language plus an optional
/// uppercase territory, written with an underscore (`de_DE`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId {
    language: String,
    territory: Option<String>,
}

impl LocaleId {
    /// Accepts `de`, `de_DE`, `de-DE` and POSIX forms such as `de_DE.UTF-8`
    /// or `de_DE@euro`. Returns `None` for empty input and the `C`/`POSIX`
    /// pseudo-locales.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.split(['.', '@']).next().unwrap_or_default();
        if s.is_empty() || s == "C" || s == "POSIX" {
            return None;
        }

        let mut parts = s.split(['_', '-']);
        let language = parts.next()?.to_ascii_lowercase();
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let territory = parts
            .next()
            .filter(|t| !t.is_empty())
            .map(|t| t.to_ascii_uppercase());

        Some(Self {
            language,
            territory,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }

    /// File-name suffixes to try, most specific first.
    pub fn candidates(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(2);
        if self.territory.is_some() {
            names.push(self.to_string());
        }
        names.push(self.language.clone());
        names
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.territory {
            Some(territory) => write!(f, "{}_{}", self.language, territory),
            None => write!(f, "{}", self.language),
        }
    }
}

/// Where translation data comes from.
#[derive(Debug, Clone)]
pub struct LocaleSources {
    /// Directory holding `<prefix>_<locale>.ts` files. `None` skips the disk.
    pub directory: Option<PathBuf>,
    pub prefix: String,
    /// Fall back to translations compiled into the binary.
    pub use_embedded: bool,
    /// Language the UI strings are written in; needs no catalog.
    pub source_language: String,
    pub options: BuildOptions,
}

impl Default for LocaleSources {
    fn default() -> Self {
        Self {
            directory: None,
            prefix: embedded::EMBEDDED_PREFIX.to_string(),
            use_embedded: true,
            source_language: "en".to_string(),
            options: BuildOptions::default(),
        }
    }
}

impl LocaleSources {
    fn is_source_language(&self, id: &LocaleId) -> bool {
        LocaleId::parse(&self.source_language)
            .is_some_and(|source| source.language() == id.language())
    }

    fn file_path(&self, suffix: &str) -> Option<PathBuf> {
        self.directory
            .as_ref()
            .map(|dir| dir.join(format!("{}_{}.ts", self.prefix, suffix)))
    }
}

/// Build the catalog for `locale`.
///
/// The source language resolves to an empty catalog. Any other locale must
/// be found on disk or among the embedded translations, otherwise
/// [`BuildError::LocaleNotFound`] is returned.
pub fn load_for_locale(locale: &str, sources: &LocaleSources) -> Result<Catalog, BuildError> {
    let id = LocaleId::parse(locale).ok_or_else(|| BuildError::LocaleNotFound {
        locale: locale.to_string(),
    })?;

    if sources.is_source_language(&id) {
        log::debug!("{} is the source language, using an empty catalog", id);
        return Ok(Catalog::empty(&id.to_string()));
    }

    for suffix in id.candidates() {
        if let Some(path) = sources.file_path(&suffix) {
            if path.is_file() {
                log::debug!("loading translations for {} from {}", id, path.display());
                let text = fs::read_to_string(&path).map_err(|source| BuildError::Io {
                    path: path.clone(),
                    source,
                })?;
                return Catalog::from_ts_str(
                    &text,
                    &path.display().to_string(),
                    &suffix,
                    sources.options,
                );
            }
        }

        if sources.use_embedded {
            if let Some(text) = embedded::get_translation(&sources.prefix, &suffix) {
                log::debug!("using embedded translations {} for {}", suffix, id);
                let origin = format!("embedded {}_{}.ts", sources.prefix, suffix);
                return Catalog::from_ts_str(text, &origin, &suffix, sources.options);
            }
        }
    }

    Err(BuildError::LocaleNotFound {
        locale: id.to_string(),
    })
}

/// Like [`load_for_locale`], but falls back to the source language instead
/// of failing.
pub fn load_or_source(locale: &str, sources: &LocaleSources) -> Catalog {
    match load_for_locale(locale, sources) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("{}; falling back to {}", e, sources.source_language);
            Catalog::empty(&sources.source_language)
        }
    }
}

/// The locale from `LC_ALL`, `LC_MESSAGES` or `LANG`, in that order.
pub fn system_locale() -> Option<LocaleId> {
    locale_from_env(|name| std::env::var(name).ok())
}

fn locale_from_env(get: impl Fn(&str) -> Option<String>) -> Option<LocaleId> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(get)
        .find(|value| !value.is_empty())
        .and_then(|value| LocaleId::parse(&value))
}

/// Locale IDs that [`load_for_locale`] can satisfy, sorted.
pub fn available_locales(sources: &LocaleSources) -> Vec<String> {
    let mut ids = BTreeSet::new();
    if let Some(id) = LocaleId::parse(&sources.source_language) {
        ids.insert(id.to_string());
    }

    if let Some(dir) = &sources.directory {
        let file_prefix = format!("{}_", sources.prefix);
        if let Ok(entries) = fs::read_dir(dir) {
            for entry in entries.flatten() {
                let name = entry.file_name();
                let name = name.to_string_lossy();
                let Some(suffix) = name
                    .strip_prefix(&file_prefix)
                    .and_then(|rest| rest.strip_suffix(".ts"))
                else {
                    continue;
                };
                if let Some(id) = LocaleId::parse(suffix) {
                    ids.insert(id.to_string());
                }
            }
        }
    }

    if sources.use_embedded && sources.prefix == embedded::EMBEDDED_PREFIX {
        ids.extend(embedded::EMBEDDED_LOCALE_IDS.iter().map(|id| id.to_string()));
    }

    ids.into_iter().collect()
}
