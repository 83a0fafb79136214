//! About Section Component
//!
//! Story text, a hover gallery, and the stats counters that count up
//! when the block scrolls into view.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_catalog::{CounterAnimation, StatsTrigger, TriggerAction};

use crate::context::use_site;
use crate::dom;

const GALLERY: &[(&str, &str)] = &[
    ("./img/truck.svg", "Our food truck"),
    ("./img/kitchen.svg", "The kitchen crew"),
    ("./img/street.svg", "Serving on the street"),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about-section">
            <h2>"About Us"</h2>
            <p>
                "We started with one truck and a handful of family recipes. "
                "Today we bring flavors from across the world to a street near you."
            </p>
            <div class="about-gallery">
                {GALLERY.iter().map(|(src, alt)| view! { <HoverImage src=*src alt=*alt /> }).collect_view()}
            </div>
            <StatsCounters />
        </section>
    }
}

/// Image that lifts while hovered
#[component]
fn HoverImage(#[prop(into)] src: String, #[prop(into)] alt: String) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);

    view! {
        <img
            class="img"
            src=src
            alt=alt
            style=move || if hovered.get() { "transform: translateY(-10px)" } else { "transform: translateY(0)" }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        />
    }
}

#[component]
fn StatsCounters() -> impl IntoView {
    let site = use_site();
    let config = site.config();
    let stats = site.stats();
    let tick_ms = config.counter_tick_ms;

    let counters = RwSignal::new(
        stats
            .iter()
            .map(|s| CounterAnimation::new(s.target, config.counter_steps))
            .collect::<Vec<_>>(),
    );
    let trigger = StoredValue::new(StatsTrigger::new(config.stats_trigger_ratio));
    let container = NodeRef::<leptos::html::Div>::new();

    let start = move || {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(tick_ms).await;
                let mut done = true;
                counters.update(|cs| {
                    for counter in cs.iter_mut() {
                        if !counter.is_done() {
                            counter.step();
                        }
                        done &= counter.is_done();
                    }
                });
                if done {
                    break;
                }
            }
        });
    };

    let check = move || {
        let Some(el) = container.get_untracked() else { return };
        let rect = el.get_bounding_client_rect();
        let mut action = TriggerAction::None;
        trigger.update_value(|t| action = t.check(rect.top(), rect.bottom(), dom::viewport_height()));
        if action == TriggerAction::Start {
            log::info!("stats section visible, animating counters");
            start();
        }
    };

    let handle = window_event_listener(leptos::ev::scroll, move |_| check());
    on_cleanup(move || handle.remove());

    let initial_check_ms = config.stats_initial_check_ms;
    spawn_local(async move {
        TimeoutFuture::new(initial_check_ms).await;
        check();
    });

    view! {
        <div class="stats-container" node_ref=container>
            {stats.into_iter().enumerate().map(|(i, stat)| view! {
                <div class="stat">
                    <span class="counter">
                        {move || counters.with(|cs| cs.get(i).map_or(0, CounterAnimation::value))}
                    </span>
                    <span class="stat-label">{stat.label}</span>
                </div>
            }).collect_view()}
        </div>
    }
}
