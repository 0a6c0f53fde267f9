//! ブラウザ上での localStorage テスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行

use emaar_common::{
    Catalog, KeyValueStore, Project, SharedSecretGate, StorageKeys, WorkerSession,
};
use emaar_web::store::BrowserStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn keys(prefix: &str) -> StorageKeys {
    StorageKeys {
        projects: format!("{}_projects", prefix),
        worker_logged_in: format!("{}_logged_in", prefix),
        worker_username: format!("{}_username", prefix),
    }
}

#[wasm_bindgen_test]
fn test_browser_store_set_get_remove() {
    let mut store = BrowserStore;
    store.set("emaar_test_key", "value").expect("書き込み失敗");
    assert_eq!(store.get("emaar_test_key").as_deref(), Some("value"));

    store.remove("emaar_test_key");
    assert!(store.get("emaar_test_key").is_none());
}

#[wasm_bindgen_test]
fn test_catalog_persists_in_local_storage() {
    let keys = keys("catalog_test");
    let mut store = BrowserStore;
    store.remove(&keys.projects);

    let mut catalog = Catalog::load(&store, &keys.projects);
    assert!(catalog.is_empty());

    catalog.prepend(Project {
        id: 1,
        title: "Creek Vista".into(),
        location: "dubai".into(),
        ..Default::default()
    });
    catalog.save(&mut store, &keys.projects).expect("保存失敗");

    let reloaded = Catalog::load(&BrowserStore, &keys.projects);
    assert_eq!(reloaded, catalog);

    store.remove(&keys.projects);
}

#[wasm_bindgen_test]
fn test_worker_session_survives_reload() {
    let keys = keys("session_test");
    let gate = SharedSecretGate::new("pw");
    let mut store = BrowserStore;
    let mut session = WorkerSession::default();

    session
        .login(&gate, &mut store, &keys, "Noura", "pw", "Worker")
        .expect("ログイン失敗");
    let restored = WorkerSession::restore(&store, &keys, "Worker");
    assert_eq!(restored.username(), Some("Noura"));

    session.logout(&mut store, &keys);
    assert!(!WorkerSession::restore(&store, &keys, "Worker").is_logged_in());
}
