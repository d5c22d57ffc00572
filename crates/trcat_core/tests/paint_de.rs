/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

//! Resolution against the German translations shipped with the binary.

use trcat_core::{load_for_locale, BuildOptions, Catalog, LocaleSources};

fn german() -> Catalog {
    load_for_locale("de_DE", &LocaleSources::default()).unwrap()
}

#[test]
fn test_build_report() {
    let report = german().report();
    assert_eq!(report.excluded_stale, 15);
    assert_eq!(report.dropped_malformed, 0);
    assert_eq!(report.accepted, 127);
}

#[test]
fn test_translated_strings() {
    let de = german();
    assert_eq!(de.locale(), "de_DE");
    assert_eq!(de.translate("MainWindow", "Save as"), "Speichern unter");
    assert_eq!(de.translate("MainWindow", "Resize Image..."), "Bildgröße anpassen");
    assert_eq!(de.translate("CanvasSizeDialog", "Width: "), "Breite: ");
    assert_eq!(de.translate("About", "About"), "Über");
    assert_eq!(
        de.translate("color_widgets::GradientListModel", "%1 (%2 colors)"),
        "%1 (%2 Farben)"
    );
}

#[test]
fn test_untranslated_strings_pass_through() {
    let de = german();
    // unfinished
    assert_eq!(de.translate("MainWindow", "Resize Image"), "Resize Image");
    assert_eq!(
        de.translate("color_widgets::GradientEditor", "Add Color"),
        "Add Color"
    );
    // finished but empty
    assert_eq!(de.translate("RectDialog", "Ellipse"), "Ellipse");
    assert_eq!(de.translate("CanvasSizeDialog", "OK"), "OK");
    // obsolete / vanished
    assert_eq!(de.translate("QApplication", "File"), "File");
    assert_eq!(de.translate("QApplication", "Open File"), "Open File");
}

#[test]
fn test_multiline_source_key() {
    let de = german();
    let source = "Failed to load the palette file\n%1";
    assert_eq!(
        de.translate("color_widgets::ColorPaletteWidget", source),
        source
    );
}

#[test]
fn test_unfinished_text_only_served_on_request() {
    assert_eq!(german().translate("MainWindow", "About"), "About");

    let text = include_str!("../../../translations/Paint_de.ts");
    let lenient = Catalog::from_ts_str(
        text,
        "Paint_de.ts",
        "de",
        BuildOptions {
            include_unfinished: true,
        },
    )
    .unwrap();
    assert_eq!(lenient.translate("MainWindow", "About"), "Über");
    assert_eq!(lenient.translated_len(), german().translated_len() + 1);
}
