//! Contact Form Component
//!
//! Simulated submission: waits the configured delay, then succeeds or
//! fails on a random roll. The response banner hides itself after a
//! few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_catalog::simulate_outcome;

use crate::context::use_site;
use crate::dom;
use crate::store::{use_page_store, PageStateStoreFields};

const CONTACT_INFO: &[&str] = &[
    "📍 Osu, Oxford Street, Accra",
    "📞 +233 20 000 0000",
    "✉️ hello@streeteats.example",
    "🕒 Tue-Sun, 11:00 - 22:00",
];

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Name,
    Email,
    Message,
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact-section">
            <h2>"Get in Touch"</h2>
            <div class="contact-layout">
                <div class="contact-info">
                    {CONTACT_INFO.iter().enumerate().map(|(index, line)| view! {
                        <p style=format!("animation-delay: {:.1}s", index as f64 * 0.1)>{*line}</p>
                    }).collect_view()}
                </div>
                <ContactForm />
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let site = use_site();
    let store = use_page_store();
    let config = site.config();
    let submit_delay_ms = config.submit_delay_ms;
    let failure_rate = config.submit_failure_rate;
    let message_hide_ms = config.message_hide_ms;

    let (focused, set_focused) = signal(None::<Field>);
    let group_style = move |field: Field| {
        move || {
            if focused.get() == Some(field) {
                "transform: scale(1.02)"
            } else {
                "transform: scale(1)"
            }
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submission = store.contact().write().begin_submit();
        let Some(payload) = submission else { return };

        spawn_local(async move {
            TimeoutFuture::new(submit_delay_ms).await;
            let result = simulate_outcome(dom::random(), failure_rate);
            if result.is_ok() {
                match serde_json::to_string(&payload) {
                    Ok(json) => log::info!("Form submitted: {}", json),
                    Err(e) => log::warn!("Form submitted (payload not serializable: {})", e),
                }
            }
            store.contact().write().finish(result);

            TimeoutFuture::new(message_hide_ms).await;
            store.contact().write().hide_message();
        });
    };

    let response_class = move || {
        store.contact().read().response().map_or(String::new(), |r| {
            if r.visible {
                format!("{} show", r.kind.css_class())
            } else {
                r.kind.css_class().to_string()
            }
        })
    };
    let response_text = move || {
        store
            .contact()
            .read()
            .response()
            .map(|r| r.text.clone())
            .unwrap_or_default()
    };

    view! {
        <form id="contactForm" class="contact-form" on:submit=on_submit>
            <div class="form-group" style=group_style(Field::Name)>
                <input
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    required=true
                    prop:value=move || store.contact().read().name.clone()
                    on:input=move |ev| store.contact().write().name = event_target_value(&ev)
                    on:focus=move |_| set_focused.set(Some(Field::Name))
                    on:blur=move |_| set_focused.set(None)
                />
            </div>
            <div class="form-group" style=group_style(Field::Email)>
                <input
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    required=true
                    prop:value=move || store.contact().read().email.clone()
                    on:input=move |ev| store.contact().write().email = event_target_value(&ev)
                    on:focus=move |_| set_focused.set(Some(Field::Email))
                    on:blur=move |_| set_focused.set(None)
                />
            </div>
            <div class="form-group" style=group_style(Field::Message)>
                <textarea
                    name="message"
                    placeholder="Your Message"
                    required=true
                    prop:value=move || store.contact().read().message.clone()
                    on:input=move |ev| store.contact().write().message = event_target_value(&ev)
                    on:focus=move |_| set_focused.set(Some(Field::Message))
                    on:blur=move |_| set_focused.set(None)
                ></textarea>
            </div>
            <button
                id="submitBtn"
                type="submit"
                disabled=move || store.contact().read().is_submitting()
            >
                <span class="btn-text">
                    <Show when=move || store.contact().read().is_submitting()>
                        <span class="loading"></span>
                    </Show>
                    {move || store.contact().read().button_label()}
                </span>
            </button>
            <div id="responseMessage" class=response_class>
                {response_text}
            </div>
        </form>
    }
}
