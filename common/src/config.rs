//! サイト設定
//!
//! すべての項目にデフォルト値があり、JSONでは必要な項目だけ上書きできる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// localStorage のキー名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub projects: String,
    pub worker_logged_in: String,
    pub worker_username: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            projects: "emaar_projects_v2".into(),
            worker_logged_in: "emaar_worker_logged_in".into(),
            worker_username: "emaar_worker_username".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage: StorageKeys,
    /// ワーカーモードの共有パスワード（表示用ゲートであり認証ではない）
    pub worker_secret: String,
    pub default_worker_name: String,
    pub toast_duration_ms: u32,
    /// お問い合わせ送信の疑似待ち時間
    pub submit_delay_ms: u32,
    pub counter_duration_ms: u32,
    pub header_scrolled_threshold: f64,
    pub active_section_offset: f64,
    pub back_to_top_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            worker_secret: "emaar2024".into(),
            default_worker_name: "Worker".into(),
            toast_duration_ms: 3000,
            submit_delay_ms: 1500,
            counter_duration_ms: 2000,
            header_scrolled_threshold: 100.0,
            active_section_offset: 150.0,
            back_to_top_threshold: 500.0,
        }
    }
}

impl SiteConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.worker_secret.is_empty() {
            return Err(Error::Config("worker_secret must not be empty".into()));
        }
        if self.storage.projects.is_empty() {
            return Err(Error::Config("storage.projects must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_keys() {
        let config = SiteConfig::default();
        assert_eq!(config.storage.projects, "emaar_projects_v2");
        assert_eq!(config.storage.worker_logged_in, "emaar_worker_logged_in");
        assert_eq!(config.storage.worker_username, "emaar_worker_username");
    }

    #[test]
    fn test_from_json_partial_override() {
        let json = r#"{ "toast_duration_ms": 5000, "storage": { "projects": "custom" } }"#;
        let config = SiteConfig::from_json(json).expect("設定読み込み失敗");
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.storage.projects, "custom");
        // 未指定の項目はデフォルト値
        assert_eq!(config.storage.worker_username, "emaar_worker_username");
        assert_eq!(config.submit_delay_ms, 1500);
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = SiteConfig::from_json("{}").expect("設定読み込み失敗");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_from_json_rejects_empty_secret() {
        let result = SiteConfig::from_json(r#"{ "worker_secret": "" }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_invalid() {
        let result = SiteConfig::from_json("not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
