//! ワーカーログインモーダル

use crate::app::{SiteController, ToastKind};
use emaar_common::Error;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn LoginModal() -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let open = controller.login_open;

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<&'static str>);

    let close = move || {
        open.set(false);
        set_password.set(String::new());
        set_error.set(None);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match controller.login(&username.get_untracked(), &password.get_untracked()) {
            Ok(()) => {
                let name = controller.worker_name().unwrap_or_default();
                close();
                set_username.set(String::new());
                controller.notify(format!("Welcome, {}!", name), ToastKind::Success);
            }
            Err(Error::InvalidCredentials) => {
                set_password.set(String::new());
                set_error.set(Some("Incorrect password. Please try again."));
            }
            Err(e) => {
                tracing::error!(error = %e, "worker login failed");
                controller.notify_error(&e);
            }
        }
    };

    view! {
        <div
            id="login-modal-overlay"
            class="modal-overlay active"
            style:display=move || if open.get() { "flex" } else { "none" }
            role="dialog"
            aria-modal="true"
            aria-labelledby="login-title"
            on:click=move |ev: ev::MouseEvent| {
                if ev.target() == ev.current_target() {
                    close();
                }
            }
        >
            <div class="modal-container login-modal">
                <button class="modal-close-btn" aria-label="Close" on:click=move |_| close()>
                    "×"
                </button>
                <h2 id="login-title">"Worker Login"</h2>
                <form id="login-form" class="login-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="worker-username">"Name"</label>
                        <input
                            type="text"
                            id="worker-username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group" class:has-error=move || error.get().is_some()>
                        <label for="worker-password">"Password"</label>
                        <input
                            type="password"
                            id="worker-password"
                            autocomplete="current-password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                set_error.set(None);
                            }
                        />
                        <span id="login-error" class="error-message" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </span>
                    </div>
                    <button type="submit" class="cta-button cta-primary">"Login"</button>
                </form>
            </div>
        </div>
    }
}
