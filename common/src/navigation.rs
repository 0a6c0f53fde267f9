//! スクロール位置とナビゲーションの計算

/// ページ内セクションの位置
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// ヘッダーに `scrolled` を付けるか
pub fn is_header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// 現在位置のセクションid
///
/// `scroll_y + offset` を含むセクションのうち最後のもの。どれにも入らなければ None。
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    let marker = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(marker))
        .map(|s| s.id.as_str())
}

/// スムーズスクロールの移動先（固定ヘッダー分を差し引く）
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height).max(0.0)
}

/// `href="#projects"` からセクションidを取り出す
pub fn section_id_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
