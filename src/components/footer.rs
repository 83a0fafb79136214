//! Footer Component

use leptos::prelude::*;

use crate::dom;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"© Street Eats. Made on wheels."</p>
            <button class="back-home" on:click=move |_| dom::smooth_scroll_to(0.0)>
                "Back to top"
            </button>
        </footer>
    }
}
