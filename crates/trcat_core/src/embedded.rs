/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

//! Translation sources baked into the binary at compile time via
//! `include_str!`, used when no translations directory is available on disk.

/// File-name prefix of the bundled translations.
pub const EMBEDDED_PREFIX: &str = "Paint";

/// All embedded locale IDs, in the `<prefix>_<id>.ts` file-name form.
pub const EMBEDDED_LOCALE_IDS: &[&str] = &["de"];

/// The `.ts` document for a bundled locale.
///
/// Returns `None` for other prefixes and for locales not bundled.
pub fn get_translation(prefix: &str, id: &str) -> Option<&'static str> {
    if prefix != EMBEDDED_PREFIX {
        return None;
    }
    match id {
        "de" => Some(include_str!("../../../translations/Paint_de.ts")),
        _ => None,
    }
}
