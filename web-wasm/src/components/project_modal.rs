//! プロジェクト詳細モーダル

use crate::app::SiteController;
use crate::dom;
use emaar_common::Project;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn ProjectModal() -> impl IntoView {
    let controller = expect_context::<SiteController>();

    // Escape で閉じる
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && controller.modal_active.get_untracked() {
            controller.close_project();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div
            id="project-modal-overlay"
            class="modal-overlay"
            class:active=move || controller.modal_active.get()
            style:display=move || if controller.selected.with(Option::is_some) { "flex" } else { "none" }
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
            on:click=move |ev: ev::MouseEvent| {
                // 背景部分のクリックのみ
                if ev.target() == ev.current_target() {
                    controller.close_project();
                }
            }
        >
            <div class="modal-container">
                <button
                    id="modal-close-btn"
                    class="modal-close-btn"
                    aria-label="Close"
                    on:click=move |_| controller.close_project()
                >
                    "×"
                </button>
                <div id="modal-content" class="modal-content">
                    {move || controller.selected.get().map(|project| view! { <ProjectDetails project=project /> })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectDetails(project: Project) -> impl IntoView {
    let controller = expect_context::<SiteController>();

    let request_info = move |_| {
        dom::scroll_to_section("contact");
        controller.close_project();
    };

    let docs = project.docs.clone();
    let media_count = project.media.len();

    view! {
        <div class="modal-image-section">
            <img src=project.image.clone() alt=project.title.clone() class="modal-project-image" />
        </div>
        <div class="modal-details-section">
            <span class=format!("project-status-badge {}", project.status.css_class())>
                {project.status.label()}
            </span>
            <h2 class="modal-project-title" id="modal-title">{project.title.clone()}</h2>
            <p class="modal-project-location">
                <span>"📍"</span>" "{project.location_display.clone()}
            </p>

            <div class="modal-project-meta">
                <MetaItem label="Category" value=project.category_display.clone() />
                {project.units.clone().map(|units| view! { <MetaItem label="Units" value=units /> })}
                {project.completion.clone().map(|completion| view! { <MetaItem label="Completion" value=completion /> })}
                {project.uploaded_by.clone().map(|name| view! { <MetaItem label="Uploaded By" value=name /> })}
                {(!project.date.is_empty()).then(|| view! { <MetaItem label="Added" value=project.date.clone() /> })}
            </div>

            <div class="modal-project-description">
                <h3>"Project Overview"</h3>
                <p>{project.description.clone()}</p>

                {(!docs.is_empty()).then(|| view! {
                    <div class="modal-docs-section">
                        <h4>"Attached Documents"</h4>
                        <ul class="docs-list">
                            {docs
                                .into_iter()
                                .map(|doc| view! {
                                    <li>
                                        <span class="doc-icon">"📄"</span>
                                        <span class="doc-name">{doc.name}</span>
                                        <span class="doc-type">{format!("({})", doc.kind)}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                })}

                {(media_count > 0).then(|| view! {
                    <div class="modal-media-section">
                        <h4>"Media Gallery"</h4>
                        <p>{format!("{} additional media files available on request.", media_count)}</p>
                    </div>
                })}
            </div>

            <div class="modal-actions">
                <button class="cta-button cta-primary" on:click=request_info>
                    "Request Information"
                </button>
            </div>
        </div>
    }
}

#[component]
fn MetaItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="meta-item">
            <span class="meta-label">{label}</span>
            <span class="meta-value">{value}</span>
        </div>
    }
}
