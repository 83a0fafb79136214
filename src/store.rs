//! Page Chrome State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity over the
//! component-local state objects from `menu_catalog`.

use leptos::prelude::*;
use menu_catalog::{ContactForm, NavState, PreloaderPhase, PurchaseFlow, SiteConfig};
use reactive_stores::Store;

#[derive(Clone, Debug, Store)]
pub struct PageState {
    /// Header styling and hamburger menu
    pub nav: NavState,
    /// Item detail modal
    pub purchase: PurchaseFlow,
    pub contact: ContactForm,
    pub preloader: PreloaderPhase,
}

impl PageState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            nav: NavState::new(config.header_offset, config.scroll_threshold),
            purchase: PurchaseFlow::new(),
            contact: ContactForm::new(),
            preloader: PreloaderPhase::Loading,
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Close the mobile menu and smooth-scroll to a section by id
pub fn store_scroll_to_section(store: &PageStore, section_id: &str) {
    let Some(offset_top) = crate::dom::section_offset_top(section_id) else {
        log::warn!("scroll target #{} not found", section_id);
        return;
    };
    let top = store.nav().write().scroll_target(offset_top);
    crate::dom::smooth_scroll_to(top);
}

