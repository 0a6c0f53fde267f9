//! プロジェクト一覧セクション（フィルタ + グリッド）

use crate::app::SiteController;
use crate::components::project_card::ProjectCard;
use emaar_common::display::{capitalize, CATEGORIES, LOCATIONS};
use emaar_common::{ProjectStatus, Selector};
use leptos::prelude::*;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let filter = controller.filter;
    let outcome = Memo::new(move |_| controller.outcome());

    let reset = move |_| filter.update(|f| f.reset());

    let status_options = ProjectStatus::ALL
        .into_iter()
        .map(|s| view! { <option value=s.as_str().to_string()>{s.label()}</option> })
        .collect_view();
    let location_options = LOCATIONS
        .iter()
        .map(|(code, name)| view! { <option value=*code>{*name}</option> })
        .collect_view();
    let category_options = CATEGORIES
        .iter()
        .map(|code| view! { <option value=*code>{capitalize(code)}</option> })
        .collect_view();

    view! {
        <section id="projects" class="projects-section">
            <div class="section-header">
                <h2 class="section-title">"Our Projects"</h2>
                <p class="section-subtitle">"Discover our portfolio of landmark developments"</p>
            </div>

            <div class="filters-container" role="search">
                <div class="filter-group">
                    <label for="status-filter">"Status"</label>
                    <select
                        id="status-filter"
                        prop:value=move || filter.with(|f| f.status.as_value().to_string())
                        on:change=move |ev| {
                            let value = Selector::parse(&event_target_value(&ev));
                            filter.update(|f| f.status = value);
                        }
                    >
                        <option value="all">"All Status"</option>
                        {status_options}
                    </select>
                </div>

                <div class="filter-group">
                    <label for="location-filter">"Location"</label>
                    <select
                        id="location-filter"
                        prop:value=move || filter.with(|f| f.location.as_value().to_string())
                        on:change=move |ev| {
                            let value = Selector::parse(&event_target_value(&ev));
                            filter.update(|f| f.location = value);
                        }
                    >
                        <option value="all">"All Locations"</option>
                        {location_options}
                    </select>
                </div>

                <div class="filter-group">
                    <label for="category-filter">"Category"</label>
                    <select
                        id="category-filter"
                        prop:value=move || filter.with(|f| f.category.as_value().to_string())
                        on:change=move |ev| {
                            let value = Selector::parse(&event_target_value(&ev));
                            filter.update(|f| f.category = value);
                        }
                    >
                        <option value="all">"All Categories"</option>
                        {category_options}
                    </select>
                </div>

                <button id="reset-filters-btn" class="reset-filters-btn" on:click=reset>
                    "Reset Filters"
                </button>
            </div>

            <p class="projects-count" aria-live="polite">
                "Showing "
                <span id="visible-count">{move || outcome.with(|o| o.visible_count())}</span>
                " of "
                <span id="total-count">{move || outcome.with(|o| o.total)}</span>
                " projects"
            </p>

            <Show
                when=move || !outcome.with(|o| o.is_empty())
                fallback=move || view! {
                    <div id="no-results-message" class="no-results">
                        <p>
                            {move || if outcome.with(|o| o.total == 0) {
                                "No projects have been published yet."
                            } else {
                                "No projects match your selected filters."
                            }}
                        </p>
                        <button id="clear-filters-btn" class="cta-button cta-secondary" on:click=reset>
                            "Clear Filters"
                        </button>
                    </div>
                }
            >
                <div id="projects-grid" class="projects-grid" role="list">
                    <For
                        each=move || outcome.get().visible
                        key=|project| project.id
                        children=move |project| view! { <ProjectCard project=project /> }
                    />
                </div>
            </Show>
        </section>
    }
}
