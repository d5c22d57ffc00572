/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

//! Qt Linguist `.ts` translation sources.
//!
//! A `.ts` file groups UI strings by *context* (usually a dialog or widget
//! class). Every message carries the untranslated source text, the current
//! translation, a status flag and the source locations it was extracted from.
//!
//! This crate only models and (de)serializes the format; resolution of
//! strings at runtime lives in `trcat_core`.

pub mod model;
pub mod parser;
pub mod writer;

pub use model::{Context, Location, Message, RawRecord, Status, TsDocument};
pub use parser::{parse_document, ParseError};
pub use writer::write_document;
