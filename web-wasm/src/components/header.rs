//! ヘッダー（ナビゲーション、モバイルメニュー、ワーカー操作）

use crate::app::SiteController;
use crate::dom;
use emaar_common::navigation::{active_section, is_header_scrolled, section_id_from_href};
use leptos::ev;
use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("projects", "Projects"),
    ("statistics", "Achievements"),
    ("contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let config = controller.config();
    let scrolled_threshold = config.header_scrolled_threshold;
    let section_offset = config.active_section_offset;
    let (scrolled, set_scrolled) = signal(false);
    let (active, set_active) = signal(String::from("home"));

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = dom::scroll_y();
        set_scrolled.set(is_header_scrolled(y, scrolled_threshold));

        let sections = dom::section_bounds();
        if let Some(id) = active_section(&sections, y, section_offset) {
            if active.get_untracked() != id {
                set_active.set(id.to_string());
            }
        }
    });
    on_cleanup(move || handle.remove());

    let menu_open = controller.menu_open;
    let close_menu = move || {
        if menu_open.get_untracked() {
            menu_open.set(false);
            dom::lock_body_scroll(false);
        }
    };

    let toggle_menu = move |_| {
        let open = !menu_open.get_untracked();
        menu_open.set(open);
        dom::lock_body_scroll(open);
    };

    let nav_items = NAV_LINKS
        .iter()
        .map(|(id, label)| {
            let id = *id;
            let href = format!("#{}", id);
            let target = href.clone();
            view! {
                <li>
                    <a
                        href=href
                        class="nav-link"
                        class:active=move || active.get() == id
                        data-section=id
                        on:click=move |ev: ev::MouseEvent| {
                            ev.prevent_default();
                            if let Some(section) = section_id_from_href(&target) {
                                dom::scroll_to_section(section);
                            }
                            close_menu();
                        }
                    >
                        {*label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header id=dom::HEADER_ID class="main-header" class:scrolled=move || scrolled.get()>
            <div class="header-container">
                <a href="#home" class="logo" on:click=move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    dom::scroll_to_top();
                }>
                    "EMAAR " <span class="logo-accent">"GULF"</span>
                </a>

                <button
                    id="mobile-menu-toggle"
                    class="mobile-menu-toggle"
                    class:active=move || menu_open.get()
                    aria-label="Toggle navigation"
                    aria-controls="nav-menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=toggle_menu
                >
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                </button>

                <nav id="nav-menu" class="nav-menu" class:active=move || menu_open.get()>
                    <ul class="nav-list">{nav_items}</ul>
                    <WorkerActions />
                </nav>
            </div>
        </header>
    }
}

/// ログイン状態に応じたボタン群
#[component]
fn WorkerActions() -> impl IntoView {
    let controller = expect_context::<SiteController>();

    view! {
        <Show
            when=move || controller.can_manage_projects()
            fallback=move || view! {
                <button
                    id="default-login-btn"
                    class="nav-login-btn"
                    on:click=move |_| controller.login_open.set(true)
                >
                    "Worker Login"
                </button>
            }
        >
            <div id="header-worker-actions" class="header-worker-actions">
                <span id="nav-login-btn" class="nav-login-btn logged-in">
                    {move || format!("Worker: {}", controller.worker_name().unwrap_or_default())}
                </span>
                <button
                    id="add-project-btn"
                    class="cta-button cta-primary btn-small"
                    on:click=move |_| controller.upload_open.set(true)
                >
                    "+ Add Project"
                </button>
                <button
                    id="logout-btn"
                    class="cta-button cta-secondary btn-small"
                    on:click=move |_| controller.logout()
                >
                    "Logout"
                </button>
            </div>
        </Show>
    }
}
