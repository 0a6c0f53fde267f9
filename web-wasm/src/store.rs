//! localStorage を使った [`KeyValueStore`] 実装

use emaar_common::{Error, KeyValueStore, Result};
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::{JsCast, JsValue};

/// window.localStorage
///
/// 状態を持たないので必要な箇所で都度作ってよい。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::StorageWrite {
                key: key.to_string(),
                message: js_error_message(&e),
            })
    }

    fn remove(&mut self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// QuotaExceededError などのメッセージを取り出す
pub(crate) fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
