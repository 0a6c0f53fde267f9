//! 実績カウンタセクション

use crate::app::SiteController;
use crate::dom;
use emaar_common::counter::FRAME_MS;
use emaar_common::{format_thousands, CounterAnimation};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// (目標値, 接尾辞, ラベル)
const STATS: [(u64, &str, &str); 4] = [
    (120, "+", "Projects Delivered"),
    (25, "", "Years of Excellence"),
    (45000, "+", "Homes Handed Over"),
    (6, "", "Cities Across the Gulf"),
];

#[component]
pub fn Statistics() -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let duration_ms = controller.config().counter_duration_ms;
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let (started, set_started) = signal(false);

    Effect::new(move |_| {
        if let Some(section) = section_ref.get() {
            dom::observe_once(&section, 0.3, move || set_started.set(true));
        }
    });

    let counters = STATS
        .iter()
        .map(|(target, suffix, label)| {
            view! {
                <Counter
                    target=*target
                    suffix=*suffix
                    label=*label
                    started=started
                    duration_ms=duration_ms
                />
            }
        })
        .collect_view();

    view! {
        <section id="statistics" class="statistics-section" node_ref=section_ref>
            <div class="section-header">
                <h2 class="section-title">"Our Achievements"</h2>
            </div>
            <div class="statistics-grid">{counters}</div>
        </section>
    }
}

#[component]
fn Counter(
    target: u64,
    suffix: &'static str,
    label: &'static str,
    started: ReadSignal<bool>,
    duration_ms: u32,
) -> impl IntoView {
    let (value, set_value) = signal(0u64);

    Effect::new(move |_| {
        if !started.get() {
            return;
        }
        spawn_local(async move {
            for frame in CounterAnimation::new(target, duration_ms) {
                set_value.set(frame);
                TimeoutFuture::new(FRAME_MS).await;
            }
        });
    });

    view! {
        <div class="stat-item">
            <span class="counter" data-target=target.to_string()>
                {move || format_thousands(value.get())}
                {suffix}
            </span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
