/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

//! Catalog construction and lookup.
//!
//! Building collapses the four status values of the `.ts` format into the one
//! decision lookup cares about: does this key have usable text or not.
//! Vanished and obsolete records never reach the index. Among the rest, the
//! last record declared for a key wins.

use crate::error::BuildError;
use linguist_ts::{parse_document, RawRecord, Status, TsDocument};
use serde::Serialize;
use std::collections::HashMap;

/// Knobs for catalog construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Serve non-empty translations still marked unfinished, the way
    /// `lrelease` does unless run with `-nounfinished`.
    pub include_unfinished: bool,
}

/// What happened to the records fed into a builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Records that were written into the index (including ones later overridden).
    pub accepted: usize,
    /// Vanished or obsolete records.
    pub excluded_stale: usize,
    /// Records missing a context name or source text.
    pub dropped_malformed: usize,
    /// Accepted records replaced by a later record with the same key.
    pub overridden: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Translated(String),
    /// The key exists but lookup must hand back the source text.
    Untranslated,
}

/// All entries sharing one source text inside a context.
#[derive(Debug, Clone, Default)]
struct Slot {
    plain: Option<Entry>,
    by_disambiguation: HashMap<String, Entry>,
}

impl Slot {
    /// Returns true if an existing entry was replaced.
    fn insert(&mut self, disambiguation: Option<String>, entry: Entry) -> bool {
        match disambiguation {
            Some(comment) => self.by_disambiguation.insert(comment, entry).is_some(),
            None => self.plain.replace(entry).is_some(),
        }
    }

    /// A disambiguated key only answers when it holds a translation;
    /// otherwise the plain key does, as in a compiled `.qm` file where
    /// untranslated entries are left out.
    fn get(&self, disambiguation: Option<&str>) -> Option<&Entry> {
        match disambiguation {
            Some(comment) => match self.by_disambiguation.get(comment) {
                Some(entry @ Entry::Translated(_)) => Some(entry),
                _ => self.plain.as_ref(),
            },
            None => self.plain.as_ref(),
        }
    }

    fn len(&self) -> usize {
        usize::from(self.plain.is_some()) + self.by_disambiguation.len()
    }
}

/// The immutable, active form of a catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: String,
    contexts: HashMap<String, HashMap<String, Slot>>,
    report: BuildReport,
}

impl Catalog {
    /// A catalog with no entries: every lookup passes the source through.
    /// Used for the source language itself.
    pub fn empty(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            contexts: HashMap::new(),
            report: BuildReport::default(),
        }
    }

    pub fn from_records(locale: &str, records: impl IntoIterator<Item = RawRecord>) -> Self {
        let mut builder = CatalogBuilder::new(locale);
        builder.extend(records);
        builder.build()
    }

    /// Build from a parsed document. The document's `language` attribute
    /// names the catalog unless it is missing.
    pub fn from_document(doc: &TsDocument, fallback_locale: &str, options: BuildOptions) -> Self {
        let locale = doc.language.as_deref().unwrap_or(fallback_locale);
        let mut builder = CatalogBuilder::new(locale).options(options);
        builder.extend(doc.records());
        builder.build()
    }

    /// Parse `.ts` text and build from it. `origin` names the data in errors.
    pub fn from_ts_str(
        text: &str,
        origin: &str,
        fallback_locale: &str,
        options: BuildOptions,
    ) -> Result<Self, BuildError> {
        let doc = parse_document(text).map_err(|e| BuildError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_document(&doc, fallback_locale, options))
    }

    /// Resolve `source` within `context`.
    ///
    /// Returns the translation of the matching key, or `source` itself when
    /// the key is unknown or has no usable translation. A disambiguation
    /// without a usable translation falls back to the undisambiguated key.
    /// Placeholders such as `%1` are returned untouched.
    pub fn lookup<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        disambiguation: Option<&str>,
    ) -> &'a str {
        let entry = self
            .contexts
            .get(context)
            .and_then(|sources| sources.get(source))
            .and_then(|slot| slot.get(disambiguation));

        match entry {
            Some(Entry::Translated(text)) => text.as_str(),
            Some(Entry::Untranslated) | None => source,
        }
    }

    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.lookup(context, source, None)
    }

    /// Whether a usable translation exists for the key.
    pub fn contains(&self, context: &str, source: &str, disambiguation: Option<&str>) -> bool {
        matches!(
            self.contexts
                .get(context)
                .and_then(|sources| sources.get(source))
                .and_then(|slot| slot.get(disambiguation)),
            Some(Entry::Translated(_))
        )
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of indexed keys, translated or not.
    pub fn len(&self) -> usize {
        self.contexts
            .values()
            .flat_map(|sources| sources.values())
            .map(Slot::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of keys that resolve to a translation.
    pub fn translated_len(&self) -> usize {
        self.contexts
            .values()
            .flat_map(|sources| sources.values())
            .flat_map(|slot| slot.plain.iter().chain(slot.by_disambiguation.values()))
            .filter(|entry| matches!(entry, Entry::Translated(_)))
            .count()
    }

    /// Context names in sorted order.
    pub fn contexts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.contexts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn report(&self) -> BuildReport {
        self.report
    }
}

/// The *building* state of a catalog. Consumed by [`CatalogBuilder::build`].
#[derive(Debug)]
pub struct CatalogBuilder {
    locale: String,
    options: BuildOptions,
    contexts: HashMap<String, HashMap<String, Slot>>,
    report: BuildReport,
}

impl CatalogBuilder {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            options: BuildOptions::default(),
            contexts: HashMap::new(),
            report: BuildReport::default(),
        }
    }

    pub fn options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn push(&mut self, record: RawRecord) {
        if !record.status.is_live() {
            self.report.excluded_stale += 1;
            return;
        }

        let (context, source) = match (record.context, record.source) {
            (Some(context), Some(source)) if !context.is_empty() => (context, source),
            (context, source) => {
                log::warn!(
                    "dropping malformed record in locale {}: context={:?} source={:?} ({})",
                    self.locale,
                    context,
                    source,
                    describe_location(&record.locations)
                );
                self.report.dropped_malformed += 1;
                return;
            }
        };

        let usable = match record.status {
            Status::Finished => true,
            Status::Unfinished => self.options.include_unfinished,
            Status::Vanished | Status::Obsolete => false,
        };
        let entry = if usable && !record.translation.is_empty() {
            Entry::Translated(record.translation)
        } else {
            Entry::Untranslated
        };

        let replaced = self
            .contexts
            .entry(context)
            .or_default()
            .entry(source)
            .or_default()
            .insert(record.disambiguation, entry);

        self.report.accepted += 1;
        if replaced {
            self.report.overridden += 1;
        }
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = RawRecord>) {
        for record in records {
            self.push(record);
        }
    }

    pub fn build(self) -> Catalog {
        log::debug!(
            "built catalog {}: {} accepted, {} stale, {} malformed, {} overridden",
            self.locale,
            self.report.accepted,
            self.report.excluded_stale,
            self.report.dropped_malformed,
            self.report.overridden
        );
        Catalog {
            locale: self.locale,
            contexts: self.contexts,
            report: self.report,
        }
    }
}

fn describe_location(locations: &[linguist_ts::Location]) -> String {
    match locations.first() {
        Some(loc) => match loc.line {
            Some(line) => format!("{}:{}", loc.filename, line),
            None => loc.filename.clone(),
        },
        None => "no location".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(context: &str, source: &str, translation: &str, status: Status) -> RawRecord {
        RawRecord::new(context, source, translation, status)
    }

    #[test]
    fn test_finished_translation_is_returned() {
        let catalog = Catalog::from_records(
            "de",
            vec![rec("MainWindow", "Save as", "Speichern unter", Status::Finished)],
        );
        assert_eq!(catalog.translate("MainWindow", "Save as"), "Speichern unter");
        assert!(catalog.contains("MainWindow", "Save as", None));
    }

    #[test]
    fn test_unfinished_passes_through() {
        let catalog = Catalog::from_records(
            "de",
            vec![rec("MainWindow", "Resize Image...", "", Status::Unfinished)],
        );
        assert_eq!(
            catalog.translate("MainWindow", "Resize Image..."),
            "Resize Image..."
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.translated_len(), 0);
    }

    #[test]
    fn test_unfinished_with_text_is_ignored_by_default() {
        let records = vec![rec("Pen", "Width", "Breite", Status::Unfinished)];
        let strict = Catalog::from_records("de", records.clone());
        assert_eq!(strict.translate("Pen", "Width"), "Width");

        let mut builder = CatalogBuilder::new("de").options(BuildOptions {
            include_unfinished: true,
        });
        builder.extend(records);
        let lenient = builder.build();
        assert_eq!(lenient.translate("Pen", "Width"), "Breite");
    }

    #[test]
    fn test_empty_finished_translation_passes_through() {
        let catalog = Catalog::from_records(
            "de",
            vec![rec("RectDialog", "Ellipse", "", Status::Finished)],
        );
        assert_eq!(catalog.translate("RectDialog", "Ellipse"), "Ellipse");
    }

    #[test]
    fn test_stale_records_are_not_indexed() {
        let catalog = Catalog::from_records(
            "de",
            vec![
                rec("QApplication", "File", "&Datei", Status::Obsolete),
                rec("QApplication", "Images", "Bilder", Status::Vanished),
            ],
        );
        assert_eq!(catalog.translate("QApplication", "File"), "File");
        assert_eq!(catalog.translate("QApplication", "Images"), "Images");
        assert!(catalog.is_empty());
        assert_eq!(catalog.report().excluded_stale, 2);
    }

    #[test]
    fn test_stale_record_does_not_shadow_live_one() {
        let catalog = Catalog::from_records(
            "de",
            vec![
                rec("Main", "Open", "Öffnen", Status::Finished),
                rec("Main", "Open", "Aufmachen", Status::Vanished),
            ],
        );
        assert_eq!(catalog.translate("Main", "Open"), "Öffnen");
    }

    #[test]
    fn test_last_declared_record_wins() {
        let catalog = Catalog::from_records(
            "de",
            vec![
                rec("Main", "Quit", "Verlassen", Status::Finished),
                rec("Main", "Quit", "Beenden", Status::Finished),
            ],
        );
        assert_eq!(catalog.translate("Main", "Quit"), "Beenden");
        assert_eq!(catalog.report().overridden, 1);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_later_unfinished_record_overrides_earlier_translation() {
        let catalog = Catalog::from_records(
            "de",
            vec![
                rec("Main", "Quit", "Beenden", Status::Finished),
                rec("Main", "Quit", "", Status::Unfinished),
            ],
        );
        assert_eq!(catalog.translate("Main", "Quit"), "Quit");
    }

    #[test]
    fn test_malformed_records_are_dropped() {
        let mut no_context = rec("x", "Save", "Speichern", Status::Finished);
        no_context.context = None;
        let mut no_source = rec("Main", "x", "Speichern", Status::Finished);
        no_source.source = None;
        let empty_context = rec("", "Save", "Speichern", Status::Finished);

        let catalog = Catalog::from_records(
            "de",
            vec![
                no_context,
                no_source,
                empty_context,
                rec("Main", "Save", "Speichern", Status::Finished),
            ],
        );

        assert_eq!(catalog.report().dropped_malformed, 3);
        assert_eq!(catalog.report().accepted, 1);
        assert_eq!(catalog.translate("Main", "Save"), "Speichern");
    }

    #[test]
    fn test_disambiguation_selects_entry() {
        let catalog = Catalog::from_records(
            "de",
            vec![
                rec("Line", "Flat", "Flach", Status::Finished),
                rec("Line", "Flat", "Eben", Status::Finished).with_disambiguation("cap style"),
            ],
        );
        assert_eq!(catalog.lookup("Line", "Flat", None), "Flach");
        assert_eq!(catalog.lookup("Line", "Flat", Some("cap style")), "Eben");
        // Unknown disambiguation falls back to the plain entry.
        assert_eq!(catalog.lookup("Line", "Flat", Some("surface")), "Flach");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_untranslated_disambiguation_falls_back_to_plain() {
        let catalog = Catalog::from_records(
            "de",
            vec![
                rec("Line", "Flat", "Flach", Status::Finished),
                rec("Line", "Flat", "", Status::Unfinished).with_disambiguation("cap"),
            ],
        );
        assert_eq!(catalog.lookup("Line", "Flat", Some("cap")), "Flach");
        assert_eq!(catalog.lookup("Line", "Flat", Some("other")), "Flach");
        assert!(catalog.contains("Line", "Flat", Some("cap")));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_disambiguated_only_entry_needs_its_comment() {
        let catalog = Catalog::from_records(
            "de",
            vec![rec("Line", "Round", "Rund", Status::Finished).with_disambiguation("join")],
        );
        assert_eq!(catalog.lookup("Line", "Round", None), "Round");
        assert_eq!(catalog.lookup("Line", "Round", Some("join")), "Rund");
    }

    #[test]
    fn test_placeholders_are_opaque() {
        let catalog = Catalog::from_records(
            "de",
            vec![rec(
                "color_widgets::ColorPaletteModel",
                "%1 (%2 colors)",
                "%1 (%2 Farben)",
                Status::Finished,
            )],
        );
        assert_eq!(
            catalog.translate("color_widgets::ColorPaletteModel", "%1 (%2 colors)"),
            "%1 (%2 Farben)"
        );
    }

    #[test]
    fn test_context_is_part_of_the_key() {
        let catalog = Catalog::from_records(
            "de",
            vec![rec("CanvasSizeDialog", "Cancel", "Abbrechen", Status::Finished)],
        );
        assert_eq!(catalog.translate("PenDialog", "Cancel"), "Cancel");
        assert_eq!(catalog.contexts(), vec!["CanvasSizeDialog"]);
    }

    #[test]
    fn test_empty_catalog_is_identity() {
        let catalog = Catalog::empty("en");
        assert_eq!(catalog.locale(), "en");
        assert_eq!(catalog.translate("MainWindow", "Save as"), "Save as");
    }

    #[test]
    fn test_from_ts_str_uses_document_language() {
        let text = r#"<TS version="2.1" language="de_DE">
<context><name>Main</name>
<message><source>Undo</source><translation>Rückgängig</translation></message>
</context></TS>"#;
        let catalog = Catalog::from_ts_str(text, "inline", "de", BuildOptions::default()).unwrap();
        assert_eq!(catalog.locale(), "de_DE");
        assert_eq!(catalog.translate("Main", "Undo"), "Rückgängig");
    }

    #[test]
    fn test_from_ts_str_reports_parse_errors() {
        let err = Catalog::from_ts_str("<TS>", "broken.ts", "de", BuildOptions::default())
            .unwrap_err();
        match err {
            BuildError::Parse { origin, .. } => assert_eq!(origin, "broken.ts"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
