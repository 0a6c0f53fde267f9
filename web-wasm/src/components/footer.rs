//! フッター（ニュースレター登録）

use crate::app::{SiteController, ToastKind};
use emaar_common::contact::validate_email;
use gloo::timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Footer() -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let submit_delay = controller.config().submit_delay_ms;

    let (email, set_email) = signal(String::new());
    let (invalid, set_invalid) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let on_subscribe = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if !validate_email(&email.get_untracked()) {
            set_invalid.set(true);
            return;
        }

        set_invalid.set(false);
        set_submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(submit_delay).await;
            set_email.set(String::new());
            set_submitting.set(false);
            controller.notify("Thanks for subscribing to our newsletter!", ToastKind::Success);
        });
    };

    view! {
        <footer class="main-footer">
            <div class="footer-container">
                <div class="footer-brand">
                    <span class="logo">"EMAAR " <span class="logo-accent">"GULF"</span></span>
                    <p>"Shaping skylines across the Gulf since 2000."</p>
                </div>

                <form class="newsletter-form" novalidate=true on:submit=on_subscribe>
                    <label for="newsletter-email">"Subscribe to our newsletter"</label>
                    <div class="newsletter-row">
                        <input
                            type="email"
                            id="newsletter-email"
                            placeholder="you@example.com"
                            class:invalid=move || invalid.get()
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                set_invalid.set(false);
                            }
                        />
                        <button type="submit" class="cta-button cta-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Subscribing..." } else { "Subscribe" }}
                        </button>
                    </div>
                    <Show when=move || invalid.get()>
                        <span class="error-message" role="alert">"Please enter a valid email address"</span>
                    </Show>
                </form>
            </div>
            <p class="footer-copyright">"© Emaar Gulf. All rights reserved."</p>
        </footer>
    }
}
