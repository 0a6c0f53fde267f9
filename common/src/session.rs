//! ワーカーモード
//!
//! 共有パスワードによる表示切り替え。クライアントに秘密も判定も見えているため、
//! セキュリティ境界ではない。判定は [`WorkerAuthorizer`] の裏に閉じ込めてあり、
//! UI側はトレイトしか知らない。

use crate::config::StorageKeys;
use crate::error::{Error, Result};
use crate::storage::KeyValueStore;

/// ワーカー判定
pub trait WorkerAuthorizer {
    fn authorize_worker(&self, secret: &str) -> bool;
}

/// 固定パスワードとの完全一致
#[derive(Debug, Clone)]
pub struct SharedSecretGate {
    secret: String,
}

impl SharedSecretGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl WorkerAuthorizer for SharedSecretGate {
    fn authorize_worker(&self, secret: &str) -> bool {
        secret == self.secret
    }
}

/// 現在の訪問者のワーカー状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerSession {
    username: Option<String>,
}

impl WorkerSession {
    /// 保存済みフラグから復元
    pub fn restore(store: &impl KeyValueStore, keys: &StorageKeys, default_name: &str) -> Self {
        let logged_in = store.get(&keys.worker_logged_in).as_deref() == Some("true");
        if !logged_in {
            return Self::default();
        }

        let username = store
            .get(&keys.worker_username)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| default_name.to_string());
        Self {
            username: Some(username),
        }
    }

    /// ログイン
    ///
    /// 失敗時は [`Error::InvalidCredentials`] を返し、状態は変えない。
    /// 名前が空なら `default_name` を使う。
    pub fn login(
        &mut self,
        gate: &impl WorkerAuthorizer,
        store: &mut impl KeyValueStore,
        keys: &StorageKeys,
        username: &str,
        secret: &str,
        default_name: &str,
    ) -> Result<()> {
        if !gate.authorize_worker(secret) {
            tracing::warn!("worker login rejected");
            return Err(Error::InvalidCredentials);
        }

        let username = match username.trim() {
            "" => default_name.to_string(),
            name => name.to_string(),
        };

        // フラグは最後に書く。途中で失敗したらストアにもログイン状態を残さない
        store.set(&keys.worker_username, &username)?;
        if let Err(e) = store.set(&keys.worker_logged_in, "true") {
            store.remove(&keys.worker_username);
            return Err(e);
        }
        tracing::info!(username = %username, "worker mode enabled");
        self.username = Some(username);
        Ok(())
    }

    pub fn logout(&mut self, store: &mut impl KeyValueStore, keys: &StorageKeys) {
        store.remove(&keys.worker_logged_in);
        store.remove(&keys.worker_username);
        self.username = None;
        tracing::info!("worker mode disabled");
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    /// 削除ボタンと「プロジェクト追加」を表示するか
    pub fn can_manage_projects(&self) -> bool {
        self.is_logged_in()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}
