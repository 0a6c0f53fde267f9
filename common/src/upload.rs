//! アップロードフォームからプロジェクトレコードを作る
//!
//! メイン画像だけはバイト列を data URL に埋め込む。
//! 追加メディアと資料は名前と種別だけを残し、中身は読まない。

use crate::catalog::Catalog;
use crate::display::{capitalize, format_location};
use crate::error::{Error, Result};
use crate::filter::ProjectFilter;
use crate::storage::KeyValueStore;
use crate::types::{Attachment, Project, ProjectStatus};
use base64::{engine::general_purpose::STANDARD, Engine as _};

const FALLBACK_MIME: &str = "application/octet-stream";

/// `data:<mime>;base64,<payload>` 形式に変換
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() { FALLBACK_MIME } else { mime.trim() };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// 読み込み済みのメイン画像
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUpload {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn to_data_url(&self) -> String {
        encode_data_url(&self.mime, &self.bytes)
    }
}

/// アップロードフォームの入力値
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadDraft {
    pub title: String,
    pub location: String,
    pub category: String,
    pub status: ProjectStatus,
    pub description: String,
    pub image: Option<ImageUpload>,
    pub media: Vec<Attachment>,
    pub docs: Vec<Attachment>,
}

impl UploadDraft {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("Project title is required".into()));
        }
        Ok(())
    }

    /// レコードに変換
    ///
    /// `id` は [`crate::Catalog::next_id`]、`date` は呼び出し側のロケール日付。
    pub fn into_project(self, id: u64, uploaded_by: Option<String>, date: String) -> Project {
        let image = self
            .image
            .as_ref()
            .map(ImageUpload::to_data_url)
            .unwrap_or_default();

        Project {
            id,
            location_display: format_location(&self.location),
            category_display: capitalize(&self.category),
            title: self.title.trim().to_string(),
            location: self.location,
            category: self.category,
            status: self.status,
            description: self.description,
            image,
            media: self.media,
            docs: self.docs,
            uploaded_by,
            date,
            units: None,
            completion: None,
        }
    }
}

/// アップロード1件分の入力
#[derive(Debug)]
pub struct UploadRequest {
    pub draft: UploadDraft,
    /// メイン画像の読み込み結果（未選択なら `None`）
    pub image: Option<Result<ImageUpload>>,
    pub uploaded_by: Option<String>,
    /// ID採番に使う現在時刻(ms)
    pub now_ms: u64,
    pub date: String,
}

/// 追加後の保存結果
#[derive(Debug)]
pub enum UploadOutcome {
    Saved(Project),
    /// 追加はしたが保存に失敗した（メモリ上には残る）
    Unsaved { project: Project, error: Error },
}

impl UploadOutcome {
    pub fn project(&self) -> &Project {
        match self {
            UploadOutcome::Saved(project) | UploadOutcome::Unsaved { project, .. } => project,
        }
    }

    pub fn into_project(self) -> Project {
        match self {
            UploadOutcome::Saved(project) | UploadOutcome::Unsaved { project, .. } => project,
        }
    }
}

/// 検証 → 画像取り込み → 採番 → 先頭に追加 → 絞り込み解除 → 保存
///
/// 検証エラーと画像の読み込みエラーはここで中断し、カタログ・フィルタ・ストアには触れない。
/// 保存の失敗は巻き戻さず [`UploadOutcome::Unsaved`] で返す。
pub fn publish(
    catalog: &mut Catalog,
    filter: &mut ProjectFilter,
    store: &mut impl KeyValueStore,
    key: &str,
    request: UploadRequest,
) -> Result<UploadOutcome> {
    let UploadRequest {
        mut draft,
        image,
        uploaded_by,
        now_ms,
        date,
    } = request;

    draft.validate()?;
    if let Some(image) = image {
        draft.image = Some(image?);
    }

    let id = catalog.next_id(now_ms);
    let project = draft.into_project(id, uploaded_by, date);
    catalog.prepend(project.clone());
    // 新しいプロジェクトが見えるように絞り込みを解除する
    filter.reset();

    match catalog.save(store, key) {
        Ok(()) => Ok(UploadOutcome::Saved(project)),
        Err(error) => {
            tracing::error!(id, error = %error, "uploaded project was not persisted");
            Ok(UploadOutcome::Unsaved { project, error })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_url() {
        assert_eq!(encode_data_url("image/png", b"hello"), "data:image/png;base64,aGVsbG8=");
        assert_eq!(encode_data_url("", &[]), "data:application/octet-stream;base64,");
    }

    #[test]
    fn test_validate_requires_title() {
        let draft = UploadDraft {
            title: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(draft.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_into_project_fills_display_fields() {
        let draft = UploadDraft {
            title: " Palm Residences ".into(),
            location: "abu-dhabi".into(),
            category: "residential".into(),
            status: ProjectStatus::Planning,
            description: "Waterfront villas".into(),
            image: Some(ImageUpload {
                mime: "image/jpeg".into(),
                bytes: vec![0xff, 0xd8, 0xff],
            }),
            media: vec![Attachment::new("tour.mp4", "video/mp4")],
            docs: vec![Attachment::new("plan.pdf", "application/pdf")],
        };

        let project = draft.into_project(42, Some("Omar".into()), "1/2/2025".into());
        assert_eq!(project.id, 42);
        assert_eq!(project.title, "Palm Residences");
        assert_eq!(project.location_display, "Abu Dhabi, UAE");
        assert_eq!(project.category_display, "Residential");
        assert_eq!(project.image, "data:image/jpeg;base64,/9j/");
        assert_eq!(project.media.len(), 1);
        assert_eq!(project.docs[0].name, "plan.pdf");
        assert_eq!(project.uploaded_by.as_deref(), Some("Omar"));
    }

    #[test]
    fn test_into_project_without_image() {
        let draft = UploadDraft {
            title: "No Image".into(),
            ..Default::default()
        };
        let project = draft.into_project(1, None, String::new());
        assert_eq!(project.image, "");
    }
}
