//! DOM操作のヘルパー（スクロール、body のスクロールロック、表示監視）

use emaar_common::navigation::{scroll_target, SectionBounds};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

pub const HEADER_ID: &str = "main-header";

fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    gloo::utils::document()
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

fn header_height() -> f64 {
    html_element_by_id(HEADER_ID)
        .map(|h| f64::from(h.offset_height()))
        .unwrap_or(0.0)
}

fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    gloo::utils::window().scroll_to_with_scroll_to_options(&options);
}

/// 固定ヘッダー分を差し引いてセクションまでスクロール
pub fn scroll_to_section(id: &str) {
    let Some(section) = html_element_by_id(id) else {
        tracing::debug!(id, "scroll target not found");
        return;
    };
    smooth_scroll_to(scroll_target(f64::from(section.offset_top()), header_height()));
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

pub fn scroll_y() -> f64 {
    gloo::utils::window().scroll_y().unwrap_or(0.0)
}

/// `section[id]` の位置一覧
pub fn section_bounds() -> Vec<SectionBounds> {
    let Ok(nodes) = gloo::utils::document().query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

/// モーダル・メニュー表示中は背面をスクロールさせない
pub fn lock_body_scroll(locked: bool) {
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = gloo::utils::body().style().set_property("overflow", value) {
        tracing::warn!(error = ?e, "failed to set body overflow");
    }
}

/// 要素が `threshold` 以上見えたら一度だけ `on_visible` を呼ぶ
pub fn observe_once(target: &Element, threshold: f64, on_visible: impl Fn() + 'static) {
    let on_visible = Rc::new(on_visible);
    let fallback = Rc::clone(&on_visible);

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if visible {
                observer.disconnect();
                on_visible();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            callback.forget();
        }
        Err(e) => {
            // 監視できない環境ではすぐに表示扱い
            tracing::warn!(error = ?e, "IntersectionObserver unavailable");
            fallback();
        }
    }
}

/// 今日の日付（ブラウザのロケール表記）
pub fn locale_date_string() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
