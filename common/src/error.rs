//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage write failed for {key}: {message}")]
    StorageWrite { key: String, message: String },

    #[error("Stored data under {key} is unreadable; refusing to overwrite it")]
    CorruptStore { key: String },

    #[error("File read error: {0}")]
    FileRead(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_storage_write() {
        let error = Error::StorageWrite {
            key: "emaar_projects_v2".to_string(),
            message: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Storage write failed for emaar_projects_v2: QuotaExceededError"
        );
    }

    #[test]
    fn test_error_display_corrupt_store() {
        let error = Error::CorruptStore {
            key: "emaar_projects_v2".to_string(),
        };
        assert!(error.to_string().contains("emaar_projects_v2"));
        assert!(error.to_string().contains("refusing to overwrite"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("site.json が不正です".to_string());
        assert_eq!(error.to_string(), "Config error: site.json が不正です");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Validation("title".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Validation"));
        assert!(debug.contains("title"));
    }
}
