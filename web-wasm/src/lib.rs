//! Emaar Gulf Web App (Leptos + WASM)

mod app;
mod components;
mod dom;
mod logging;
pub mod store;

use app::App;
use emaar_common::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// ビルド時に埋め込むサイト設定
const SITE_CONFIG: &str = include_str!("../config/site.json");

fn load_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "site.json is invalid, using defaults");
            SiteConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::DEBUG);

    let config = load_config();
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
    tracing::info!("Emaar Gulf website initialized");
}
