//! プロジェクトカード

use crate::app::SiteController;
use emaar_common::Project;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let id = project.id;
    let docs_count = project.docs.len();

    let open = {
        let project = project.clone();
        move || controller.open_project(project.clone())
    };
    let open_on_click = open.clone();
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" || ev.key() == " " {
            ev.prevent_default();
            open();
        }
    };

    view! {
        <article
            class="project-card"
            role="listitem"
            tabindex="0"
            data-project-id=id.to_string()
            on:click=move |_| open_on_click()
            on:keydown=on_keydown
        >
            <div class="project-image-wrapper">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    class="project-image"
                    loading="lazy"
                />
                <span class=format!("project-status-badge {}", project.status.css_class())>
                    {project.status.label()}
                </span>
            </div>
            <div class="project-content">
                <span class="project-category">{project.category_display.clone()}</span>
                <h3 class="project-title">{project.title.clone()}</h3>
                <p class="project-location">
                    <span class="location-icon">"📍"</span>
                    {project.location_display.clone()}
                </p>
                <p class="project-description">{project.description.clone()}</p>

                {(docs_count > 0).then(|| view! {
                    <div class="project-attachment-badge">
                        {format!("📎 {} Documents Attached", docs_count)}
                    </div>
                })}

                {move || controller.can_manage_projects().then(|| view! {
                    <button
                        class="delete-project-btn"
                        on:click=move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            controller.delete_project(id);
                        }
                    >
                        "Delete Project"
                    </button>
                })}
            </div>
        </article>
    }
}
