//! トースト通知

use crate::app::SiteController;
use leptos::prelude::*;

#[component]
pub fn ToastStack() -> impl IntoView {
    let controller = expect_context::<SiteController>();

    view! {
        <div class="toast-container" role="status" aria-live="polite">
            <For
                each=move || controller.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=format!("toast toast-{}", toast.kind.as_str())>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
