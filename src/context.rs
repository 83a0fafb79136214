//! Site Context
//!
//! Bridges the framework-agnostic `MenuCatalogStore` into Leptos. The store
//! notifies a subscribed callback on every change; the callback bumps a
//! version signal, and every derived read tracks that signal.

use leptos::prelude::*;
use menu_catalog::{is_mobile_width, Catalog, MenuCatalogStore, MenuItem, SiteConfig, StatEntry};

/// Catalog store plus site config, provided via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    catalog: StoredValue<MenuCatalogStore>,
    /// Bumped by the store observer on every catalog change
    pub catalog_version: ReadSignal<u32>,
    config: StoredValue<SiteConfig>,
    stats: StoredValue<Vec<StatEntry>>,
}

impl SiteContext {
    pub fn new(catalog: Catalog, config: SiteConfig) -> Self {
        let (catalog_version, set_catalog_version) = signal(0u32);
        let mut store = MenuCatalogStore::from_catalog(&catalog);
        store.subscribe(move |event| {
            log::debug!("catalog event: {:?}", event);
            set_catalog_version.update(|v| *v += 1);
        });
        Self {
            catalog: StoredValue::new(store),
            catalog_version,
            config: StoredValue::new(config),
            stats: StoredValue::new(catalog.stats),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn stats(&self) -> Vec<StatEntry> {
        self.stats.get_value()
    }

    // ========================
    // Inbound
    // ========================

    /// Classify a viewport width against the configured breakpoint
    pub fn set_viewport_width(&self, width: f64) {
        let breakpoint = self.config.with_value(|c| c.mobile_breakpoint);
        self.catalog
            .update_value(|store| store.set_viewport(is_mobile_width(width, breakpoint)));
    }

    pub fn select_category(&self, category: &str) {
        self.catalog.update_value(|store| store.select_category(category));
    }

    // ========================
    // Outbound (tracked reads)
    // ========================

    pub fn displayed_categories(&self) -> Vec<String> {
        self.catalog_version.track();
        self.catalog.with_value(|store| {
            store
                .displayed_categories()
                .into_iter()
                .map(str::to_string)
                .collect()
        })
    }

    pub fn filtered_items(&self) -> Vec<MenuItem> {
        self.catalog_version.track();
        self.catalog
            .with_value(|store| store.filtered_items().into_iter().cloned().collect())
    }

    pub fn active_category(&self) -> String {
        self.catalog_version.track();
        self.catalog.with_value(|store| store.active_category().to_string())
    }

    pub fn item(&self, id: u32) -> Option<MenuItem> {
        self.catalog.with_value(|store| store.item(id).cloned())
    }
}

/// Get the site context
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}
