//! ワーカーモードテスト

use emaar_common::{
    Error, KeyValueStore, MemoryStore, SharedSecretGate, SiteConfig, WorkerAuthorizer,
    WorkerSession,
};

/// 正しいパスワードでワーカー機能が有効になり、再読み込み後も維持される
#[test]
fn test_correct_secret_enables_and_persists() {
    let config = SiteConfig::default();
    let gate = SharedSecretGate::new(config.worker_secret.clone());
    let mut store = MemoryStore::new();
    let mut session = WorkerSession::restore(&store, &config.storage, &config.default_worker_name);
    assert!(!session.can_manage_projects());

    session
        .login(&gate, &mut store, &config.storage, "Fatima", &config.worker_secret, "Worker")
        .expect("ログイン失敗");
    assert!(session.can_manage_projects());

    let restored = WorkerSession::restore(&store, &config.storage, &config.default_worker_name);
    assert_eq!(restored.username(), Some("Fatima"));
    assert!(restored.can_manage_projects());
}

/// それ以外の入力では状態もストアも変わらない
#[test]
fn test_wrong_secret_leaves_everything_hidden() {
    let config = SiteConfig::default();
    let gate = SharedSecretGate::new(config.worker_secret.clone());
    let mut store = MemoryStore::new();
    let mut session = WorkerSession::default();

    for attempt in ["", "wrong", "EMAAR2024", " emaar2024"] {
        let result = session.login(&gate, &mut store, &config.storage, "Fatima", attempt, "Worker");
        assert!(matches!(result, Err(Error::InvalidCredentials)), "attempt={:?}", attempt);
        assert!(!session.can_manage_projects());
        assert!(store.get(&config.storage.worker_logged_in).is_none());
    }
}

/// 判定ロジックは差し替え可能
#[test]
fn test_custom_authorizer() {
    struct DenyAll;
    impl WorkerAuthorizer for DenyAll {
        fn authorize_worker(&self, _secret: &str) -> bool {
            false
        }
    }

    let config = SiteConfig::default();
    let mut store = MemoryStore::new();
    let mut session = WorkerSession::default();
    let result = session.login(
        &DenyAll,
        &mut store,
        &config.storage,
        "Fatima",
        &config.worker_secret,
        "Worker",
    );
    assert!(result.is_err());
}

/// 指定キーへの書き込みだけ失敗するストア
struct FailingKey {
    inner: MemoryStore,
    failing: String,
}

impl KeyValueStore for FailingKey {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> emaar_common::Result<()> {
        if key == self.failing {
            return Err(Error::StorageWrite {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) {
        self.inner.remove(key)
    }
}

/// 保存に失敗したログインは、再読み込み後もワーカーモードにならない
#[test]
fn test_failed_login_write_leaves_no_stored_session() {
    let config = SiteConfig::default();
    let gate = SharedSecretGate::new(config.worker_secret.clone());

    for failing in [&config.storage.worker_logged_in, &config.storage.worker_username] {
        let mut store = FailingKey {
            inner: MemoryStore::new(),
            failing: failing.clone(),
        };
        let mut session = WorkerSession::default();

        let result = session.login(
            &gate,
            &mut store,
            &config.storage,
            "Fatima",
            &config.worker_secret,
            "Worker",
        );
        assert!(matches!(result, Err(Error::StorageWrite { .. })), "failing={}", failing);
        assert!(!session.is_logged_in());

        let restored = WorkerSession::restore(&store, &config.storage, &config.default_worker_name);
        assert!(!restored.is_logged_in(), "failing={}", failing);
        assert!(store.inner.is_empty(), "failing={}", failing);
    }
}
