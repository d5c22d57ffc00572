/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

//! Serialize a [`TsDocument`] back to the layout Qt Linguist writes, so
//! documents survive a read/write cycle through translation tooling.

use crate::model::*;
use std::fmt::{self, Write};

const INDENT: &str = "    ";

pub fn write_document(doc: &TsDocument) -> String {
    doc.to_string()
}

impl fmt::Display for TsDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n")?;
        f.write_str("<!DOCTYPE TS>\n")?;

        write!(f, "<TS version=\"{}\"", escape(&self.version))?;
        if let Some(lang) = &self.language {
            write!(f, " language=\"{}\"", escape(lang))?;
        }
        if let Some(lang) = &self.source_language {
            write!(f, " sourcelanguage=\"{}\"", escape(lang))?;
        }
        f.write_str(">\n")?;

        for context in &self.contexts {
            write_context(f, context)?;
        }

        f.write_str("</TS>\n")
    }
}

fn write_context(out: &mut impl Write, context: &Context) -> fmt::Result {
    out.write_str("<context>\n")?;
    if let Some(name) = &context.name {
        writeln!(out, "{INDENT}<name>{}</name>", escape(name))?;
    }
    for message in &context.messages {
        write_message(out, message)?;
    }
    out.write_str("</context>\n")
}

fn write_message(out: &mut impl Write, message: &Message) -> fmt::Result {
    let pad = INDENT.repeat(2);
    if message.numerus {
        writeln!(out, "{INDENT}<message numerus=\"yes\">")?;
    } else {
        writeln!(out, "{INDENT}<message>")?;
    }

    for loc in &message.locations {
        match loc.line {
            Some(line) => writeln!(
                out,
                "{pad}<location filename=\"{}\" line=\"{}\"/>",
                escape(&loc.filename),
                line
            )?,
            None => writeln!(out, "{pad}<location filename=\"{}\"/>", escape(&loc.filename))?,
        }
    }
    if let Some(source) = &message.source {
        writeln!(out, "{pad}<source>{}</source>", escape(source))?;
    }
    if let Some(comment) = &message.disambiguation {
        writeln!(out, "{pad}<comment>{}</comment>", escape(comment))?;
    }
    if let Some(comment) = &message.extra_comment {
        writeln!(out, "{pad}<extracomment>{}</extracomment>", escape(comment))?;
    }
    if let Some(comment) = &message.translator_comment {
        writeln!(
            out,
            "{pad}<translatorcomment>{}</translatorcomment>",
            escape(comment)
        )?;
    }

    let open = match message.status.type_attr() {
        Some(kind) => format!("<translation type=\"{kind}\">"),
        None => "<translation>".to_string(),
    };
    if message.numerus {
        // A message built in code may only carry `translation`.
        let forms = if message.numerus_forms.is_empty() {
            std::slice::from_ref(&message.translation)
        } else {
            message.numerus_forms.as_slice()
        };
        writeln!(out, "{pad}{open}")?;
        for form in forms {
            writeln!(out, "{pad}{INDENT}<numerusform>{}</numerusform>", escape(form))?;
        }
        writeln!(out, "{pad}</translation>")?;
    } else {
        writeln!(out, "{pad}{open}{}</translation>", escape(&message.translation))?;
    }

    writeln!(out, "{INDENT}</message>")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
