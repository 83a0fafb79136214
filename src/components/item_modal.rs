//! Item Modal Component
//!
//! Detail view for the selected menu item with a buy button.
//! Buying asks for native confirmation and reports the outcome in an alert.

use leptos::prelude::*;
use menu_catalog::PurchaseFlow;

use crate::context::use_site;
use crate::dom;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn ItemModal() -> impl IntoView {
    let site = use_site();
    let store = use_page_store();
    let currency = StoredValue::new(site.config().currency);

    let buy = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let Some(item) = store.purchase().read().selected().cloned() else { return };
        let confirmed = currency.with_value(|c| dom::confirm(&PurchaseFlow::prompt(&item, c)));
        let outcome = store.purchase().write().resolve(confirmed);
        if let Some(outcome) = outcome {
            dom::alert(outcome.message());
        }
    };

    let close = move |_| store.purchase().write().close();

    view! {
        <Show when=move || store.purchase().read().is_open()>
            <div class="modal-overlay" on:click=close>
                {move || store.purchase().read().selected().cloned().map(|item| {
                    let price = currency.with_value(|c| format!("{}{}", c, item.price_label()));
                    view! {
                        <div class="modal" on:click=|ev| ev.stop_propagation()>
                            <button class="modal-close" on:click=close>"✕"</button>
                            <img src=item.image.clone() alt=item.name.clone() class="modal-image" />
                            <h2>{item.emoji.clone()} " " {item.name.clone()}</h2>
                            <p class="modal-category">{item.category.clone()}</p>
                            <p>{item.description.clone()}</p>
                            <div class="modal-footer">
                                <span class="modal-price">{price}</span>
                                <button class="buy-btn" on:click=buy>"Buy Now"</button>
                            </div>
                        </div>
                    }
                })}
            </div>
        </Show>
    }
}
