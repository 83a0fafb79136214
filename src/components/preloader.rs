//! Preloader Component
//!
//! Overlay shown while the page settles, then faded out and removed on
//! the configured timeline.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_catalog::{Preloader, PreloaderPhase};

use crate::context::use_site;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn PreloaderOverlay() -> impl IntoView {
    let site = use_site();
    let store = use_page_store();
    let config = site.config();
    let timeline = Preloader::new(
        config.preloader_delay_ms,
        config.content_reveal_delay_ms,
        config.preloader_remove_delay_ms,
    );

    // Run timeline on mount
    Effect::new(move |_| {
        let steps = timeline.schedule();
        spawn_local(async move {
            for (delay_ms, phase) in steps {
                TimeoutFuture::new(delay_ms).await;
                store.preloader().set(phase);
            }
            log::debug!("preloader removed");
        });
    });

    view! {
        <Show when=move || store.preloader().get() != PreloaderPhase::Removed>
            <div
                id="preloader"
                class=move || if store.preloader().get() == PreloaderPhase::Loading { "preloader" } else { "preloader hidden" }
            >
                <div class="preloader-spinner"></div>
                <p>"Firing up the grill..."</p>
            </div>
        </Show>
    }
}
