//! ヒーローセクション

use crate::dom;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero-section">
            <div class="hero-content">
                <h1 class="hero-title">"Building the Future of the Gulf"</h1>
                <p class="hero-subtitle">
                    "Landmark residential, commercial and hospitality developments across the UAE, Saudi Arabia and Qatar."
                </p>
                <div class="hero-buttons">
                    <button
                        id="explore-projects-btn"
                        class="cta-button cta-primary"
                        on:click=move |_| dom::scroll_to_section("projects")
                    >
                        "Explore Projects"
                    </button>
                    <button
                        id="contact-us-btn"
                        class="cta-button cta-secondary"
                        on:click=move |_| dom::scroll_to_section("contact")
                    >
                        "Contact Us"
                    </button>
                </div>
            </div>
        </section>
    }
}
