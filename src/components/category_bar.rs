//! Category Bar Component
//!
//! One filter button per displayed category.

use leptos::prelude::*;

use crate::context::use_site;

#[component]
pub fn CategoryBar() -> impl IntoView {
    let site = use_site();

    view! {
        <div class="category-filters">
            <For
                each=move || site.displayed_categories()
                key=|category| category.clone()
                children=move |category| {
                    let label = category.clone();
                    let is_active = {
                        let category = category.clone();
                        move || site.active_category() == category
                    };
                    view! {
                        <button
                            class=move || if is_active() { "category-btn active" } else { "category-btn" }
                            on:click=move |_| site.select_category(&category)
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
