/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

//! Positional `%1`..`%99` markers.
//!
//! Catalog lookup never looks inside strings. These helpers exist for the two
//! parties that do: the caller filling in values after lookup, and tooling
//! that checks a translation kept the markers of its source.

use std::collections::BTreeSet;

/// A marker found in a string: byte range and its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker {
    start: usize,
    end: usize,
    number: u8,
}

fn markers(text: &str) -> Vec<Marker> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        let digits = bytes[i + 1..]
            .iter()
            .take(2)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            i += 1;
            continue;
        }
        let end = i + 1 + digits;
        // ASCII digits only, always parses
        let number: u8 = text[i + 1..end].parse().unwrap_or(0);
        if number > 0 {
            found.push(Marker { start: i, end, number });
        }
        i = end;
    }

    found
}

/// The set of marker numbers used in `text`.
pub fn placeholders(text: &str) -> BTreeSet<u8> {
    markers(text).into_iter().map(|m| m.number).collect()
}

/// Replace `%n` with `args[n - 1]`. Markers without a matching argument stay
/// as they are.
pub fn substitute(text: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for marker in markers(text) {
        let Some(arg) = args.get(usize::from(marker.number) - 1) else {
            continue;
        };
        out.push_str(&text[last..marker.start]);
        out.push_str(arg);
        last = marker.end;
    }

    out.push_str(&text[last..]);
    out
}

/// Whether `translation` uses exactly the markers of `source`.
pub fn same_placeholders(source: &str, translation: &str) -> bool {
    placeholders(source) == placeholders(translation)
}
