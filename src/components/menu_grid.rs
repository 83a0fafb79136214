//! Menu Grid Component
//!
//! Cards for the currently filtered items. Clicking a card opens the
//! purchase modal for that item.

use leptos::prelude::*;
use menu_catalog::MenuItem;

use crate::context::use_site;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn MenuGrid() -> impl IntoView {
    let site = use_site();
    let store = use_page_store();
    let currency = site.config().currency;

    let open_item = move |id: u32| {
        if let Some(item) = site.item(id) {
            store.purchase().write().select(item);
        }
    };

    view! {
        <div class="menu-grid">
            <For
                each=move || site.filtered_items()
                key=|item| item.id
                children=move |item: MenuItem| {
                    let id = item.id;
                    view! {
                        <div class="menu-item fade-in" on:click=move |_| open_item(id)>
                            <img src=item.image.clone() alt=item.name.clone() class="menu-item-image" />
                            <div class="menu-item-body">
                                <h3>
                                    <span class="menu-item-emoji">{item.emoji.clone()}</span>
                                    " "
                                    {item.name.clone()}
                                </h3>
                                <p class="menu-item-description">{item.description.clone()}</p>
                                <span class="menu-item-price">
                                    {format!("{}{}", currency, item.price_label())}
                                </span>
                            </div>
                        </div>
                    }
                }
            />
            <Show when=move || site.filtered_items().is_empty()>
                <p class="menu-empty">"No dishes in this category yet."</p>
            </Show>
        </div>
    }
}
