//! カタログ永続化テスト
//!
//! アップロード→保存→再読み込み、削除、容量超過時の挙動を検証

use emaar_common::{
    Attachment, Catalog, Error, ImageUpload, KeyValueStore, MemoryStore, ProjectStatus,
    StorageKeys, UploadDraft,
};

fn draft(title: &str) -> UploadDraft {
    UploadDraft {
        title: title.to_string(),
        location: "sharjah".to_string(),
        category: "hospitality".to_string(),
        status: ProjectStatus::Ongoing,
        description: "Beachfront resort".to_string(),
        image: Some(ImageUpload {
            mime: "image/png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }),
        media: vec![Attachment::new("drone.mov", "video/quicktime")],
        docs: vec![Attachment::new("floorplan.pdf", "application/pdf")],
    }
}

/// アップロードしたレコードが再読み込み後も全項目一致する
#[test]
fn test_upload_then_reload_roundtrip() {
    let keys = StorageKeys::default();
    let mut store = MemoryStore::new();
    let mut catalog = Catalog::load(&store, &keys.projects);

    let id = catalog.next_id(1_712_000_000_000);
    let project = draft("Al Majaz Resort").into_project(id, Some("Omar".into()), "4/1/2024".into());
    catalog.prepend(project.clone());
    catalog.save(&mut store, &keys.projects).expect("保存失敗");

    let reloaded = Catalog::load(&store, &keys.projects);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get(id), Some(&project));
}

/// 新しいアップロードは先頭に入る
#[test]
fn test_uploads_are_prepended_and_persisted_in_order() {
    let keys = StorageKeys::default();
    let mut store = MemoryStore::new();
    let mut catalog = Catalog::default();

    for (i, title) in ["first", "second", "third"].iter().enumerate() {
        // 同じミリ秒でもIDは重複しない
        let id = catalog.next_id(1000);
        catalog.prepend(draft(title).into_project(id, None, format!("day {}", i)));
        catalog.save(&mut store, &keys.projects).expect("保存失敗");
    }

    let reloaded = Catalog::load(&store, &keys.projects);
    let titles: Vec<&str> = reloaded.projects().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);

    let mut ids: Vec<u64> = reloaded.projects().iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

/// 既知IDの削除は1件だけ消し、残りの順序を保つ
#[test]
fn test_delete_known_and_unknown_ids() {
    let keys = StorageKeys::default();
    let mut store = MemoryStore::new();
    let mut catalog = Catalog::default();
    for id in [10, 20, 30, 40] {
        catalog.prepend(draft(&format!("p{}", id)).into_project(id, None, String::new()));
    }
    catalog.save(&mut store, &keys.projects).unwrap();

    assert!(catalog.remove(20).is_some());
    catalog.save(&mut store, &keys.projects).unwrap();
    let ids: Vec<u64> = Catalog::load(&store, &keys.projects)
        .projects()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![40, 30, 10]);

    let before = catalog.clone();
    assert!(catalog.remove(999).is_none());
    assert_eq!(catalog, before);
}

/// 容量超過: エラーを返すがメモリ上の追加は残る
#[test]
fn test_quota_exceeded_keeps_in_memory_mutation() {
    let keys = StorageKeys::default();
    let mut store = MemoryStore::with_quota(64);
    let mut catalog = Catalog::default();

    let project = draft("Too Big").into_project(1, None, String::new());
    catalog.prepend(project);

    let err = catalog.save(&mut store, &keys.projects).unwrap_err();
    assert!(matches!(err, Error::StorageWrite { .. }));
    assert_eq!(catalog.len(), 1);
    assert!(store.get(&keys.projects).is_none());
}

/// 追加メディア・資料は名前と種別だけが保存される
#[test]
fn test_attachments_store_descriptors_only() {
    let keys = StorageKeys::default();
    let mut store = MemoryStore::new();
    let mut catalog = Catalog::default();
    catalog.prepend(draft("Docs").into_project(5, None, String::new()));
    catalog.save(&mut store, &keys.projects).unwrap();

    let raw = store.get(&keys.projects).expect("保存データが無い");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let doc = &value[0]["docs"][0];
    assert_eq!(doc["name"], "floorplan.pdf");
    assert_eq!(doc["type"], "application/pdf");
    assert_eq!(doc.as_object().map(|o| o.len()), Some(2));
    assert!(value[0]["image"].as_str().unwrap().starts_with("data:image/png;base64,"));
}
