/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

//! Translation-maintenance reports over a parsed `.ts` document.

use linguist_ts::{Status, TsDocument};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use trcat_core::placeholder::{placeholders, same_placeholders};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ContextStats {
    pub context: String,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
    pub obsolete: usize,
    /// Finished messages whose translation is empty.
    pub empty: usize,
}

impl ContextStats {
    pub fn live(&self) -> usize {
        self.finished + self.unfinished
    }

    /// Share of live messages that resolve to a translation, in percent.
    pub fn completion(&self) -> f64 {
        if self.live() == 0 {
            return 100.0;
        }
        let done = self.finished - self.empty;
        (done as f64 * 100.0) / self.live() as f64
    }

    fn add(&mut self, other: &ContextStats) {
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.vanished += other.vanished;
        self.obsolete += other.obsolete;
        self.empty += other.empty;
    }
}

const UNNAMED: &str = "<unnamed>";

/// Per-context counts plus a total row.
pub fn stats(doc: &TsDocument) -> (Vec<ContextStats>, ContextStats) {
    let mut rows = Vec::new();
    let mut total = ContextStats {
        context: "TOTAL".to_string(),
        ..Default::default()
    };

    for ctx in &doc.contexts {
        let mut row = ContextStats {
            context: ctx.name.clone().unwrap_or_else(|| UNNAMED.to_string()),
            ..Default::default()
        };
        for m in &ctx.messages {
            match m.status {
                Status::Finished => {
                    row.finished += 1;
                    if m.translation.is_empty() {
                        row.empty += 1;
                    }
                }
                Status::Unfinished => row.unfinished += 1,
                Status::Vanished => row.vanished += 1,
                Status::Obsolete => row.obsolete += 1,
            }
        }
        total.add(&row);
        rows.push(row);
    }

    (rows, total)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Issue {
    /// The record cannot be indexed at all.
    Malformed {
        context: Option<String>,
        source: Option<String>,
    },
    PlaceholderMismatch {
        context: String,
        source: String,
        translation: String,
    },
    EmptyFinished {
        context: String,
        source: String,
    },
    DuplicateKey {
        context: String,
        source: String,
        disambiguation: Option<String>,
        count: usize,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Malformed { context, source } => write!(
                f,
                "malformed record: context={:?} source={:?}",
                context, source
            ),
            Issue::PlaceholderMismatch {
                context,
                source,
                translation,
            } => write!(
                f,
                "{}: placeholders {:?} in {:?} but {:?} in {:?}",
                context,
                placeholders(source),
                source,
                placeholders(translation),
                translation
            ),
            Issue::EmptyFinished { context, source } => {
                write!(f, "{}: {:?} is finished but has no translation", context, source)
            }
            Issue::DuplicateKey {
                context,
                source,
                disambiguation,
                count,
            } => match disambiguation {
                Some(d) => write!(
                    f,
                    "{}: {:?} ({}) declared {} times, the last one wins",
                    context, source, d, count
                ),
                None => write!(
                    f,
                    "{}: {:?} declared {} times, the last one wins",
                    context, source, count
                ),
            },
        }
    }
}

/// Problems a translator should look at. Stale records are ignored since
/// they never reach a catalog.
pub fn check(doc: &TsDocument) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<(String, String, Option<String>), usize> = HashMap::new();
    let mut order = Vec::new();

    for record in doc.records() {
        if !record.status.is_live() {
            continue;
        }
        let (context, source) = match (record.context, record.source) {
            (Some(context), Some(source)) if !context.is_empty() => (context, source),
            (context, source) => {
                issues.push(Issue::Malformed { context, source });
                continue;
            }
        };

        if record.status == Status::Finished && record.translation.is_empty() {
            issues.push(Issue::EmptyFinished {
                context: context.clone(),
                source: source.clone(),
            });
        } else if !record.translation.is_empty()
            && !same_placeholders(&source, &record.translation)
        {
            issues.push(Issue::PlaceholderMismatch {
                context: context.clone(),
                source: source.clone(),
                translation: record.translation.clone(),
            });
        }

        let key = (context, source, record.disambiguation);
        let count = seen.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push(key);
        }
        *count += 1;
    }

    for key in order {
        let count = seen[&key];
        if count > 1 {
            let (context, source, disambiguation) = key;
            issues.push(Issue::DuplicateKey {
                context,
                source,
                disambiguation,
                count,
            });
        }
    }

    issues
}
