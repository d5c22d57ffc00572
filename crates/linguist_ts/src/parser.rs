/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

use crate::model::*;
use roxmltree::{Document, Node, ParsingOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("expected <TS> root element, found <{0}>")]
    UnexpectedRoot(String),
}

/// Parse a complete `.ts` document.
///
/// Only XML syntax errors and a foreign root element fail the parse. Missing
/// context names, missing sources and unknown status values are tolerated so
/// that one bad entry never hides the rest of the file.
pub fn parse_document(text: &str) -> Result<TsDocument, ParseError> {
    // Linguist always writes `<!DOCTYPE TS>`.
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;

    let doc = Document::parse_with_options(text, options)?;
    parse_ts(doc.root_element())
}

pub fn parse_ts(node: Node) -> Result<TsDocument, ParseError> {
    if node.tag_name().name() != "TS" {
        return Err(ParseError::UnexpectedRoot(
            node.tag_name().name().to_string(),
        ));
    }

    let mut contexts = Vec::new();
    for child in node.children() {
        if !child.is_element() { continue; }
        match child.tag_name().name() {
            "context" => contexts.push(parse_context(child)),
            // Standalone <message> elements (no context) appear in some
            // hand-written files.
            "message" => contexts.push(Context {
                name: None,
                messages: vec![parse_message(child)],
            }),
            other => log::debug!("ignoring <{}> under <TS>", other),
        }
    }

    Ok(TsDocument {
        version: node.attribute("version").unwrap_or("2.1").to_string(),
        language: node.attribute("language").map(|s| s.to_string()),
        source_language: node.attribute("sourcelanguage").map(|s| s.to_string()),
        contexts,
    })
}

fn parse_context(node: Node) -> Context {
    let mut name = None;
    let mut messages = Vec::new();

    for child in node.children() {
        if !child.is_element() { continue; }
        match child.tag_name().name() {
            "name" => name = Some(element_text(child)),
            "message" => messages.push(parse_message(child)),
            _ => {}
        }
    }

    Context { name, messages }
}

fn parse_message(node: Node) -> Message {
    let mut message = Message {
        numerus: node.attribute("numerus") == Some("yes"),
        ..Default::default()
    };

    for child in node.children() {
        if !child.is_element() { continue; }
        match child.tag_name().name() {
            "source" => message.source = Some(element_text(child)),
            // Qt treats an empty comment as no comment at all.
            "comment" => {
                let comment = element_text(child);
                message.disambiguation = (!comment.is_empty()).then_some(comment);
            }
            "extracomment" => message.extra_comment = Some(element_text(child)),
            "translatorcomment" => message.translator_comment = Some(element_text(child)),
            "location" => message.locations.push(parse_location(child)),
            "translation" => {
                message.status = match Status::from_type_attr(child.attribute("type")) {
                    Some(status) => status,
                    None => {
                        // Never serve a translation we cannot classify.
                        log::warn!(
                            "unknown translation type {:?}, treating as unfinished",
                            child.attribute("type").unwrap_or_default()
                        );
                        Status::Unfinished
                    }
                };
                message.numerus_forms = parse_numerus_forms(child);
                message.translation = match message.numerus_forms.first() {
                    Some(form) => form.clone(),
                    None => element_text(child),
                };
            }
            _ => {}
        }
    }

    message
}

/// Plural messages wrap each form in `<numerusform>`; the first one is the
/// singular/default form.
fn parse_numerus_forms(node: Node) -> Vec<String> {
    node.children()
        .filter(|c| c.is_element() && c.tag_name().name() == "numerusform")
        .map(element_text)
        .collect()
}

fn parse_location(node: Node) -> Location {
    Location {
        filename: node.attribute("filename").unwrap_or_default().to_string(),
        line: node.attribute("line").and_then(|s| s.parse().ok()),
    }
}

/// Concatenated text content, whitespace preserved.
fn element_text(node: Node) -> String {
    node.children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}
