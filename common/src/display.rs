//! 表示用の変換テーブル
//!
//! 所在地コード・カテゴリコードを画面表示の文字列に変換する。

/// 所在地コードと表示名
pub const LOCATIONS: [(&str, &str); 6] = [
    ("dubai", "Dubai, UAE"),
    ("abu-dhabi", "Abu Dhabi, UAE"),
    ("sharjah", "Sharjah, UAE"),
    ("riyadh", "Riyadh, KSA"),
    ("jeddah", "Jeddah, KSA"),
    ("doha", "Doha, Qatar"),
];

/// カテゴリコード
pub const CATEGORIES: [&str; 4] = ["residential", "commercial", "hospitality", "mixed-use"];

/// 所在地コードを表示名に変換（未登録のコードはそのまま返す）
pub fn format_location(code: &str) -> String {
    LOCATIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, display)| display.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// 先頭1文字だけ大文字にする
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_location_known() {
        assert_eq!(format_location("dubai"), "Dubai, UAE");
        assert_eq!(format_location("abu-dhabi"), "Abu Dhabi, UAE");
        assert_eq!(format_location("doha"), "Doha, Qatar");
    }

    #[test]
    fn test_format_location_unknown_passthrough() {
        assert_eq!(format_location("muscat"), "muscat");
        assert_eq!(format_location(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("residential"), "Residential");
        assert_eq!(capitalize("mixed-use"), "Mixed-use");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("é"), "É");
    }
}
