//! Navigation Bar Component
//!
//! Fixed header with section links and the mobile hamburger menu.

use leptos::prelude::*;

use crate::store::{store_scroll_to_section, use_page_store, PageStateStoreFields};

/// (section id, label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("menu", "Menu"),
    ("about", "About"),
    ("contact", "Contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_page_store();

    let header_class = move || {
        if store.nav().read().is_scrolled() {
            "site-header scrolled"
        } else {
            "site-header"
        }
    };
    let menu_class = move || {
        if store.nav().read().mobile_menu_open() {
            "nav-links open"
        } else {
            "nav-links"
        }
    };

    view! {
        <header class=header_class>
            <div class="logo">"🚚 Street Eats"</div>
            <button
                class="hamburger"
                on:click=move |_| store.nav().write().toggle_mobile_menu()
            >
                "☰"
            </button>
            <nav class=menu_class>
                {NAV_LINKS.iter().map(|(id, label)| {
                    let id = *id;
                    view! {
                        <a
                            href=format!("#{}", id)
                            on:click=move |ev| {
                                ev.prevent_default();
                                store_scroll_to_section(&store, id);
                            }
                        >
                            {*label}
                        </a>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
