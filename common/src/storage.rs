//! キー・バリューストア抽象
//!
//! ブラウザでは localStorage、テストでは [`MemoryStore`] を使う。

use crate::error::{Error, Result};
use std::collections::HashMap;

/// 文字列キー・文字列値の永続ストア
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// 書き込み。容量超過などの失敗は [`Error::StorageWrite`]
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str);
}

/// メモリ上のストア
///
/// `with_quota` を指定すると、全値の合計バイト数が上限を超える書き込みを拒否する。
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(Error::StorageWrite {
                    key: key.to_string(),
                    message: format!("quota exceeded ({} > {} bytes)", needed, quota),
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
