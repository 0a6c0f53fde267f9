//! カタログフィルタ
//!
//! ステータス・所在地・カテゴリの3条件のAND。`all` はワイルドカード。
//! フィルタはカタログを変更せず、一致したレコードの順序付き部分列を返す。

use crate::types::Project;
use std::fmt;

/// ワイルドカードを表すセレクト値
pub const ALL: &str = "all";

/// 1つのフィルタ条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    #[default]
    All,
    Exactly(String),
}

impl Selector {
    /// `<select>` の値から生成（`"all"` と空文字はワイルドカード）
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            Selector::All
        } else {
            Selector::Exactly(value.to_string())
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Exactly(target) => target == candidate,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// `<select>` に戻す値
    pub fn as_value(&self) -> &str {
        match self {
            Selector::All => ALL,
            Selector::Exactly(target) => target,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// 3条件のフィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub status: Selector,
    pub location: Selector,
    pub category: Selector,
}

impl ProjectFilter {
    pub fn new(status: &str, location: &str, category: &str) -> Self {
        Self {
            status: Selector::parse(status),
            location: Selector::parse(location),
            category: Selector::parse(category),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.status.matches(project.status.as_str())
            && self.location.matches(&project.location)
            && self.category.matches(&project.category)
    }

    pub fn apply(&self, projects: &[Project]) -> FilterOutcome {
        let visible: Vec<Project> = projects
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        FilterOutcome {
            visible,
            total: projects.len(),
        }
    }

    /// いずれかの条件が指定されているか
    pub fn is_active(&self) -> bool {
        !(self.status.is_all() && self.location.is_all() && self.category.is_all())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// フィルタ結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    pub visible: Vec<Project>,
    /// カタログ全体の件数
    pub total: usize,
}

impl FilterOutcome {
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// 「該当なし」表示にすべきか
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
