//! トップへ戻るボタン

use crate::app::SiteController;
use crate::dom;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn BackToTop() -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let threshold = controller.config().back_to_top_threshold;
    let (visible, set_visible) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        set_visible.set(dom::scroll_y() > threshold);
    });
    on_cleanup(move || handle.remove());

    view! {
        <button
            id="back-to-top"
            class="back-to-top"
            class:visible=move || visible.get()
            aria-label="Back to top"
            on:click=move |_| dom::scroll_to_top()
        >
            "↑"
        </button>
    }
}
