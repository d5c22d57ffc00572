/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

//! Translation catalogs.
//!
//! A [`Catalog`] maps `(context, source text)` pairs to translated UI strings
//! for one locale. Lookup is total: whenever no usable translation exists the
//! source text comes back unchanged, so callers never handle a missing-string
//! error.
//!
//! ```rust
//! use trcat_core::Catalog;
//! use linguist_ts::{RawRecord, Status};
//!
//! let catalog = Catalog::from_records(
//!     "de",
//!     vec![
//!         RawRecord::new("MainWindow", "Save as", "Speichern unter", Status::Finished),
//!         RawRecord::new("MainWindow", "Resize Image", "", Status::Unfinished),
//!     ],
//! );
//!
//! assert_eq!(catalog.translate("MainWindow", "Save as"), "Speichern unter");
//! assert_eq!(catalog.translate("MainWindow", "Resize Image"), "Resize Image");
//! assert_eq!(catalog.translate("Nowhere", "Quit"), "Quit");
//! ```
//!
//! Catalogs are immutable once built. Hosts that switch locale at runtime
//! hold them through [`CurrentCatalog`], which swaps whole catalogs at once.

pub mod catalog;
pub mod config;
pub mod current;
pub mod embedded;
pub mod error;
pub mod locale;
pub mod placeholder;

pub use catalog::{BuildOptions, BuildReport, Catalog, CatalogBuilder};
pub use config::Config;
pub use current::CurrentCatalog;
pub use error::{BuildError, ConfigError};
pub use locale::{load_for_locale, LocaleId, LocaleSources};
