//! プロジェクトカタログ
//!
//! 挿入順のプロジェクト一覧。起動時にストアから1回だけ読み込み、
//! 追加・削除のたびに配列全体をストアへ書き戻す（差分保存はしない）。
//!
//! 読めなかったレコードは捨てずに保持し、保存時にそのまま書き戻す。
//! 配列として読めない値が入っていた場合は上書きしない。

use crate::error::{Error, Result};
use crate::storage::KeyValueStore;
use crate::types::Project;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
    /// 型が合わず読めなかったレコード（原文のまま）
    unreadable: Vec<Value>,
    /// 保存値が配列として読めなかった
    corrupt: bool,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Default::default()
        }
    }

    /// ストアから読み込み
    ///
    /// キーが無ければ空。レコード単位で読み、読めないものは表示から外して保持する。
    pub fn load(store: &impl KeyValueStore, key: &str) -> Self {
        let Some(raw) = store.get(key) else {
            return Self::default();
        };

        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored catalog is malformed, saving disabled");
                return Self {
                    corrupt: true,
                    ..Default::default()
                };
            }
        };

        let mut projects = Vec::with_capacity(records.len());
        let mut unreadable = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            match Project::deserialize(&record) {
                Ok(project) => projects.push(project),
                Err(e) => {
                    tracing::warn!(key, index, error = %e, "skipping unreadable project record");
                    unreadable.push(record);
                }
            }
        }

        tracing::debug!(key, count = projects.len(), skipped = unreadable.len(), "catalog loaded");
        Self {
            projects,
            unreadable,
            corrupt: false,
        }
    }

    /// 配列全体を保存
    ///
    /// 失敗してもメモリ上の状態は巻き戻さない。
    /// 読み込み時に壊れていた場合は [`Error::CorruptStore`] で拒否する。
    pub fn save(&self, store: &mut impl KeyValueStore, key: &str) -> Result<()> {
        if self.corrupt {
            return Err(Error::CorruptStore {
                key: key.to_string(),
            });
        }

        let mut records = self
            .projects
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        records.extend(self.unreadable.iter().cloned());

        let json = serde_json::to_string(&records)?;
        store.set(key, &json)?;
        tracing::debug!(key, count = records.len(), bytes = json.len(), "catalog saved");
        Ok(())
    }

    /// 読めずに保持しているレコード数
    pub fn unreadable_len(&self) -> usize {
        self.unreadable.len()
    }

    /// 保存値が壊れていて書き戻せない状態か
    pub fn is_corrupt(&self) -> bool {
        self.corrupt
    }

    /// 新しいID
    ///
    /// 基本は現在時刻(ms)。同じミリ秒に複数作成された場合は既存IDより大きくずらす。
    pub fn next_id(&self, now_ms: u64) -> u64 {
        let mut id = now_ms;
        while self.contains(id) {
            id += 1;
        }
        id
    }

    /// 先頭に追加
    pub fn prepend(&mut self, project: Project) {
        tracing::debug!(id = project.id, title = %project.title, "project added");
        self.projects.insert(0, project);
    }

    /// IDで削除。未知のIDなら何もしない
    pub fn remove(&mut self, id: u64) -> Option<Project> {
        let index = self.projects.iter().position(|p| p.id == id)?;
        let removed = self.projects.remove(index);
        tracing::debug!(id, "project removed");
        Some(removed)
    }

    pub fn get(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
