//! プロジェクトレコードの型定義
//!
//! localStorage に保存されるJSONと同じ形（camelCase）。
//! - Project: カタログの1件
//! - Attachment: 追加メディア・資料（名前と種別のみ、中身は保持しない）
//! - ProjectStatus: 進捗ステータス

use crate::display::capitalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 進捗ステータス
///
/// 選択肢は画面側の都合で増減するので、未知の値も `Other` としてそのまま保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Planning,
    #[default]
    Ongoing,
    Completed,
    Other(String),
}

impl ProjectStatus {
    /// フォーム・フィルタに並べる既知の値
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Planning,
        ProjectStatus::Ongoing,
        ProjectStatus::Completed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Other(raw) => raw,
        }
    }

    /// バッジ表示用ラベル
    pub fn label(&self) -> String {
        match self {
            ProjectStatus::Planning => "Planning".to_string(),
            ProjectStatus::Ongoing => "Ongoing".to_string(),
            ProjectStatus::Completed => "Completed".to_string(),
            ProjectStatus::Other(raw) => capitalize(raw),
        }
    }

    /// CSSクラス名（`status-ongoing` など）
    pub fn css_class(&self) -> String {
        format!("status-{}", self.as_str())
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ProjectStatus::Other(_))
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 保存値からの変換（完全一致のみ既知扱い、他は原文のまま）
impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "planning" => ProjectStatus::Planning,
            "ongoing" => ProjectStatus::Ongoing,
            "completed" => ProjectStatus::Completed,
            _ => ProjectStatus::Other(raw),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// フォーム入力からの変換。既知の値以外はエラー
impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planning" => Ok(ProjectStatus::Planning),
            "ongoing" => Ok(ProjectStatus::Ongoing),
            "completed" => Ok(ProjectStatus::Completed),
            _ => Err(format!("Unknown status: {}. Use planning, ongoing, or completed", s)),
        }
    }
}

/// 添付ファイルの記述子
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    /// 宣言されたMIMEタイプ（空の場合あり）
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Attachment {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// プロジェクト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 作成時刻(ms)由来のID
    pub id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub location: String,         // 所在地コード

    #[serde(default)]
    pub location_display: String, // "Dubai, UAE"

    #[serde(default)]
    pub category: String,         // カテゴリコード

    #[serde(default)]
    pub category_display: String,

    #[serde(default)]
    pub status: ProjectStatus,

    #[serde(default)]
    pub description: String,

    /// メイン画像（data URL）
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub media: Vec<Attachment>,

    #[serde(default)]
    pub docs: Vec<Attachment>,

    #[serde(default)]
    pub uploaded_by: Option<String>,

    #[serde(default)]
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<String>,
}

impl Project {
    pub fn has_docs(&self) -> bool {
        !self.docs.is_empty()
    }

    pub fn has_media(&self) -> bool {
        !self.media.is_empty()
    }
}
