/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

//! The process-wide "active catalog" slot.
//!
//! Readers take an `Arc` snapshot and resolve strings against it; a locale
//! switch builds the new catalog completely before swapping the pointer, so
//! no reader can see a mixture of two locales.

use crate::catalog::Catalog;
use crate::error::BuildError;
use crate::locale::{load_for_locale, LocaleSources};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug)]
pub struct CurrentCatalog {
    active: RwLock<Arc<Catalog>>,
    generation: AtomicU64,
}

impl CurrentCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            active: RwLock::new(Arc::new(catalog)),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the active catalog. Stays valid across later switches.
    pub fn get(&self) -> Arc<Catalog> {
        // The slot only ever holds a complete Arc, so a poisoned lock still
        // guards consistent data.
        let guard = self.active.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install `catalog`, returning the one it replaces.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        self.install(Arc::new(catalog))
    }

    fn install(&self, next: Arc<Catalog>) -> Arc<Catalog> {
        let mut guard = self.active.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        self.generation.fetch_add(1, Ordering::Release);
        previous
    }

    /// Load `locale` and make it active. On error the current catalog stays.
    pub fn switch_locale(
        &self,
        locale: &str,
        sources: &LocaleSources,
    ) -> Result<Arc<Catalog>, BuildError> {
        let catalog = Arc::new(load_for_locale(locale, sources)?);
        log::info!("switching catalog to {}", catalog.locale());
        self.install(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Bumped on every swap. Hosts compare it to decide when to re-translate
    /// their visible strings.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Resolve against the active catalog.
    pub fn tr(&self, context: &str, source: &str) -> String {
        self.get().translate(context, source).to_string()
    }
}

impl Default for CurrentCatalog {
    fn default() -> Self {
        Self::new(Catalog::empty("en"))
    }
}
