//! Hero Section Component

use leptos::prelude::*;

use crate::dom;
use crate::store::{store_scroll_to_section, use_page_store};

#[component]
pub fn Hero() -> impl IntoView {
    let store = use_page_store();

    view! {
        <section id="home" class="hero">
            <h1>"Street Eats"</h1>
            <p>"World flavors, served fresh from the truck."</p>
            <div class="hero-actions">
                <button class="menu-btn" on:click=move |_| store_scroll_to_section(&store, "menu")>
                    "See the Menu"
                </button>
                <a
                    href="#"
                    class="cta-button"
                    on:click=move |ev| {
                        ev.prevent_default();
                        dom::alert("Explore feature coming soon!");
                    }
                >
                    "Explore"
                </a>
            </div>
        </section>
    }
}
