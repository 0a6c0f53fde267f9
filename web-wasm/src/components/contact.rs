//! お問い合わせフォーム
//!
//! 送信はタイマーで疑似的に完了させ、ブラウザの外には何も送らない。

use crate::app::{SiteController, ToastKind};
use emaar_common::contact::{character_count, near_limit};
use emaar_common::{ContactField, ContactForm, FieldError};
use gloo::timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ContactSection() -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let submit_delay = controller.config().submit_delay_ms;

    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let found = form.with_untracked(ContactForm::validate);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            controller.notify("Please correct the highlighted fields.", ToastKind::Error);
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(submit_delay).await;
            tracing::info!("contact form submitted");
            form.set(ContactForm::default());
            set_submitting.set(false);
            controller.notify(
                "Thank you! Your message has been sent successfully.",
                ToastKind::Success,
            );
        });
    };

    let message = move || form.with(|f| f.message.clone());

    view! {
        <section id="contact" class="contact-section">
            <div class="section-header">
                <h2 class="section-title">"Get in Touch"</h2>
                <p class="section-subtitle">"Our team will respond within one business day"</p>
            </div>

            <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
                <FormField field=ContactField::Name label="Full Name" errors=errors>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </FormField>

                <FormField field=ContactField::Email label="Email Address" errors=errors>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </FormField>

                <FormField field=ContactField::Phone label="Phone (optional)" errors=errors>
                    <input
                        type="tel"
                        id="phone"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </FormField>

                <FormField field=ContactField::Subject label="Subject" errors=errors>
                    <select
                        id="subject"
                        prop:value=move || form.with(|f| f.subject.clone())
                        on:change=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                    >
                        <option value="">"Select a subject"</option>
                        <option value="sales">"Sales Enquiry"</option>
                        <option value="leasing">"Leasing"</option>
                        <option value="investment">"Investment Opportunities"</option>
                        <option value="general">"General"</option>
                    </select>
                </FormField>

                <FormField field=ContactField::Message label="Message" errors=errors>
                    <textarea
                        id="message"
                        rows="5"
                        prop:value=message
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                    <span class="char-count" class:warning=move || near_limit(&message())>
                        {move || character_count(&message())}
                    </span>
                </FormField>

                <button type="submit" class="cta-button cta-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </section>
    }
}

/// ラベル + 入力 + エラー表示
#[component]
fn FormField(
    field: ContactField,
    label: &'static str,
    errors: RwSignal<Vec<FieldError>>,
    children: Children,
) -> impl IntoView {
    let error = move || errors.with(|e| ContactForm::error_for(e, field));

    view! {
        <div class="form-group" class:has-error=move || error().is_some()>
            <label for=field.id()>{label}</label>
            {children()}
            <span class="error-message" role="alert">{move || error().unwrap_or_default()}</span>
        </div>
    }
}
