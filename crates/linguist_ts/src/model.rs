/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TsDocument {
    pub version: String,
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

impl Default for TsDocument {
    fn default() -> Self {
        Self {
            version: "2.1".to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
        }
    }
}

/// A group of messages, typically one dialog or widget class.
///
/// `name` is optional only because hand-edited files sometimes lose it; such
/// contexts are carried through so the catalog builder can report them.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: Option<String>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Message {
    pub source: Option<String>,
    pub translation: String,
    pub status: Status,
    /// The `<comment>` element: tells apart identical source strings that
    /// mean different things.
    pub disambiguation: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub numerus: bool,
    /// Every `<numerusform>` of a plural message, in order. `translation`
    /// mirrors the first one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub numerus_forms: Vec<String>,
    pub locations: Vec<Location>,
}

/// Where a string was extracted from. Only translation tooling reads this.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Location {
    pub filename: String,
    pub line: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Finished,
    Unfinished,
    /// The source string disappeared from the UI since the last extraction.
    Vanished,
    /// Like `Vanished`, written by older Linguist versions.
    Obsolete,
}

impl Status {
    /// Maps the `type` attribute of `<translation>`.
    pub fn from_type_attr(attr: Option<&str>) -> Option<Self> {
        match attr {
            None => Some(Status::Finished),
            Some("unfinished") => Some(Status::Unfinished),
            Some("vanished") => Some(Status::Vanished),
            Some("obsolete") => Some(Status::Obsolete),
            Some(_) => None,
        }
    }

    pub fn type_attr(self) -> Option<&'static str> {
        match self {
            Status::Finished => None,
            Status::Unfinished => Some("unfinished"),
            Status::Vanished => Some("vanished"),
            Status::Obsolete => Some("obsolete"),
        }
    }

    /// Whether the source string still exists in the live UI.
    pub fn is_live(self) -> bool {
        matches!(self, Status::Finished | Status::Unfinished)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Finished => write!(f, "finished"),
            Status::Unfinished => write!(f, "unfinished"),
            Status::Vanished => write!(f, "vanished"),
            Status::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// One message flattened together with the name of its context.
///
/// This is the shape the catalog builder consumes. Fields stay optional so
/// that malformed records reach the builder instead of failing the parse.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub context: Option<String>,
    pub source: Option<String>,
    pub translation: String,
    pub status: Status,
    pub disambiguation: Option<String>,
    pub locations: Vec<Location>,
}

impl RawRecord {
    /// A well-formed finished record without provenance. Handy for tests and
    /// for hosts that assemble catalogs in code.
    pub fn new(context: &str, source: &str, translation: &str, status: Status) -> Self {
        Self {
            context: Some(context.to_string()),
            source: Some(source.to_string()),
            translation: translation.to_string(),
            status,
            disambiguation: None,
            locations: Vec::new(),
        }
    }

    pub fn with_disambiguation(mut self, comment: &str) -> Self {
        self.disambiguation = Some(comment.to_string());
        self
    }
}

impl TsDocument {
    /// All messages in declaration order, each tagged with its context name.
    pub fn records(&self) -> Vec<RawRecord> {
        self.contexts
            .iter()
            .flat_map(|ctx| {
                ctx.messages.iter().map(move |m| RawRecord {
                    context: ctx.name.clone(),
                    source: m.source.clone(),
                    translation: m.translation.clone(),
                    status: m.status,
                    disambiguation: m.disambiguation.clone(),
                    locations: m.locations.clone(),
                })
            })
            .collect()
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts
            .iter()
            .find(|c| c.name.as_deref() == Some(name))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_attr_mapping() {
        assert_eq!(Status::from_type_attr(None), Some(Status::Finished));
        assert_eq!(
            Status::from_type_attr(Some("vanished")),
            Some(Status::Vanished)
        );
        assert_eq!(Status::from_type_attr(Some("bogus")), None);
        for status in [
            Status::Finished,
            Status::Unfinished,
            Status::Vanished,
            Status::Obsolete,
        ] {
            assert_eq!(Status::from_type_attr(status.type_attr()), Some(status));
        }
    }

    #[test]
    fn test_liveness() {
        assert!(Status::Finished.is_live());
        assert!(Status::Unfinished.is_live());
        assert!(!Status::Vanished.is_live());
        assert!(!Status::Obsolete.is_live());
    }

    #[test]
    fn test_records_keep_declaration_order() {
        let doc = TsDocument {
            contexts: vec![
                Context {
                    name: Some("A".into()),
                    messages: vec![
                        Message {
                            source: Some("one".into()),
                            ..Default::default()
                        },
                        Message {
                            source: Some("two".into()),
                            ..Default::default()
                        },
                    ],
                },
                Context {
                    name: None,
                    messages: vec![Message {
                        source: Some("three".into()),
                        ..Default::default()
                    }],
                },
            ],
            ..Default::default()
        };

        let records = doc.records();
        let sources: Vec<_> = records.iter().map(|r| r.source.as_deref()).collect();
        assert_eq!(sources, vec![Some("one"), Some("two"), Some("three")]);
        assert_eq!(records[2].context, None);
        assert_eq!(doc.message_count(), 3);
        assert!(doc.context("A").is_some());
    }
}
