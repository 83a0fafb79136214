//! Street Eats Frontend App
//!
//! Single page: header, hero, menu browser, about/stats, contact.

use leptos::prelude::*;
use menu_catalog::{Catalog, PreloaderPhase, SiteConfig};
use reactive_stores::Store;

use crate::components::{
    AboutSection, CategoryBar, ContactSection, Footer, Hero, ItemModal, MenuGrid, NavBar,
    PreloaderOverlay,
};
use crate::context::SiteContext;
use crate::dom;
use crate::store::{PageState, PageStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::builtin();
    let catalog = Catalog::builtin().unwrap_or_else(|e| {
        log::error!("failed to load menu: {}", e);
        Catalog::default()
    });
    log::info!("menu ready: {} items", catalog.items.len());

    let store = Store::new(PageState::new(&config));
    let site = SiteContext::new(catalog, config);

    // Provide context to all children
    provide_context(site);
    provide_context(store);

    // Viewport class: initial check plus resize tracking
    site.set_viewport_width(dom::viewport_width());
    let resize = window_event_listener(leptos::ev::resize, move |_| {
        site.set_viewport_width(dom::viewport_width());
    });
    let scroll = window_event_listener(leptos::ev::scroll, move |_| {
        store.nav().write().on_scroll(dom::scroll_y());
    });
    on_cleanup(move || {
        resize.remove();
        scroll.remove();
    });

    let main_class = move || match store.preloader().get() {
        PreloaderPhase::Loading | PreloaderPhase::Hidden => "main-content",
        PreloaderPhase::ContentLoaded | PreloaderPhase::Removed => "main-content loaded",
    };

    view! {
        <PreloaderOverlay />
        <div id="mainContent" class=main_class>
            <NavBar />
            <Hero />

            <section id="menu" class="menu-section">
                <h2>"Our Menu"</h2>
                <CategoryBar />
                <MenuGrid />
            </section>

            <AboutSection />
            <ContactSection />
            <Footer />
        </div>
        <ItemModal />
    }
}
