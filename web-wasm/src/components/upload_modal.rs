//! プロジェクトアップロードモーダル（ワーカー専用）

use crate::app::{SiteController, ToastKind};
use emaar_common::display::{capitalize, CATEGORIES, LOCATIONS};
use emaar_common::{Attachment, Error, ImageUpload, ProjectStatus, UploadDraft};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

/// 入力欄で選択されたファイルの名前と種別（中身は読まない）
fn attachments(input: Option<HtmlInputElement>) -> Vec<Attachment> {
    let Some(files) = input.and_then(|i| i.files()) else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|f| Attachment::new(f.name(), f.type_()))
        .collect()
}

/// メイン画像のバイト列を読む
async fn read_image(file: web_sys::File) -> Result<ImageUpload, Error> {
    let file = gloo::file::File::from(file);
    let mime = file.raw_mime_type();
    let bytes = gloo::file::futures::read_as_bytes(&file)
        .await
        .map_err(|e| Error::FileRead(format!("{}: {}", file.name(), e)))?;
    Ok(ImageUpload { mime, bytes })
}

#[component]
pub fn UploadModal() -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let open = controller.upload_open;

    let form_ref = NodeRef::<html::Form>::new();
    let image_ref = NodeRef::<html::Input>::new();
    let media_ref = NodeRef::<html::Input>::new();
    let docs_ref = NodeRef::<html::Input>::new();

    let (title, set_title) = signal(String::new());
    let (location, set_location) = signal(String::from(LOCATIONS[0].0));
    let (category, set_category) = signal(String::from(CATEGORIES[0]));
    let (status, set_status) = signal(ProjectStatus::Ongoing);
    let (description, set_description) = signal(String::new());
    let (uploading, set_uploading) = signal(false);

    let reset_form = move || {
        if let Some(form) = form_ref.get_untracked() {
            form.reset();
        }
        set_title.set(String::new());
        set_location.set(LOCATIONS[0].0.to_string());
        set_category.set(CATEGORIES[0].to_string());
        set_status.set(ProjectStatus::Ongoing);
        set_description.set(String::new());
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }

        let image_file = image_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let media = attachments(media_ref.get_untracked());
        let docs = attachments(docs_ref.get_untracked());

        let draft = UploadDraft {
            title: title.get_untracked(),
            location: location.get_untracked(),
            category: category.get_untracked(),
            status: status.get_untracked(),
            description: description.get_untracked(),
            image: None,
            media,
            docs,
        };
        if let Err(e) = draft.validate() {
            controller.notify_error(&e);
            return;
        }

        // 読み込み完了まで再送信させない
        set_uploading.set(true);
        spawn_local(async move {
            let image = match image_file {
                Some(file) => Some(read_image(file).await),
                None => None,
            };
            let result = controller.add_project(draft, image);
            set_uploading.set(false);

            match result {
                Ok(project) => {
                    tracing::info!(id = project.id, "project uploaded");
                    reset_form();
                    open.set(false);
                    controller.notify("Project uploaded successfully!", ToastKind::Success);
                }
                Err(e @ Error::FileRead(_)) => {
                    tracing::error!(error = %e, "image read failed");
                    controller.notify("Error uploading project", ToastKind::Error);
                }
                Err(e) => controller.notify_error(&e),
            }
        });
    };

    let location_options = LOCATIONS
        .iter()
        .map(|(code, name)| view! { <option value=*code>{*name}</option> })
        .collect_view();
    let category_options = CATEGORIES
        .iter()
        .map(|code| view! { <option value=*code>{capitalize(code)}</option> })
        .collect_view();
    let status_options = ProjectStatus::ALL
        .into_iter()
        .map(|s| view! { <option value=s.as_str().to_string()>{s.label()}</option> })
        .collect_view();

    view! {
        <div
            id="upload-modal-overlay"
            class="modal-overlay active"
            style:display=move || {
                if open.get() && controller.can_manage_projects() { "flex" } else { "none" }
            }
            role="dialog"
            aria-modal="true"
            aria-labelledby="upload-title-heading"
        >
            <div class="modal-container upload-modal">
                <button
                    id="upload-modal-close"
                    class="modal-close-btn"
                    aria-label="Close"
                    on:click=move |_| open.set(false)
                >
                    "×"
                </button>
                <h2 id="upload-title-heading">"Add New Project"</h2>

                <form id="upload-project-form" class="upload-form" node_ref=form_ref on:submit=on_submit>
                    <div class="form-group">
                        <label for="upload-title">"Project Title"</label>
                        <input
                            type="text"
                            id="upload-title"
                            required=true
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="upload-location">"Location"</label>
                            <select
                                id="upload-location"
                                prop:value=move || location.get()
                                on:change=move |ev| set_location.set(event_target_value(&ev))
                            >
                                {location_options}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="upload-category">"Category"</label>
                            <select
                                id="upload-category"
                                prop:value=move || category.get()
                                on:change=move |ev| set_category.set(event_target_value(&ev))
                            >
                                {category_options}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="upload-status">"Status"</label>
                            <select
                                id="upload-status"
                                prop:value=move || status.with(|s| s.as_str().to_string())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or_default();
                                    set_status.set(value);
                                }
                            >
                                {status_options}
                            </select>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="upload-description">"Description"</label>
                        <textarea
                            id="upload-description"
                            rows="4"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="form-group">
                        <label for="upload-image">"Main Image"</label>
                        <input type="file" id="upload-image" accept="image/*" node_ref=image_ref />
                    </div>
                    <div class="form-group">
                        <label for="upload-media">"Additional Media"</label>
                        <input type="file" id="upload-media" accept="image/*,video/*" multiple=true node_ref=media_ref />
                    </div>
                    <div class="form-group">
                        <label for="upload-docs">"Documents"</label>
                        <input type="file" id="upload-docs" accept=".pdf,.doc,.docx,.xls,.xlsx" multiple=true node_ref=docs_ref />
                    </div>

                    <button type="submit" class="cta-button cta-primary" disabled=move || uploading.get()>
                        {move || if uploading.get() { "Uploading..." } else { "Upload Project" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
