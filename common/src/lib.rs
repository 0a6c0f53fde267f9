//! Emaar Gulf Common Library
//!
//! Web(WASM)フロントエンドから使うプラットフォーム非依存のロジック:
//! カタログ、フィルタ、ワーカーモード、アップロード、入力検証

pub mod types;
pub mod display;
pub mod error;
pub mod config;
pub mod storage;
pub mod catalog;
pub mod filter;
pub mod session;
pub mod upload;
pub mod contact;
pub mod counter;
pub mod navigation;
pub mod modal;

pub use types::{Attachment, Project, ProjectStatus};
pub use error::{Error, Result};
pub use config::{SiteConfig, StorageKeys};
pub use storage::{KeyValueStore, MemoryStore};
pub use catalog::Catalog;
pub use filter::{FilterOutcome, ProjectFilter, Selector};
pub use session::{SharedSecretGate, WorkerAuthorizer, WorkerSession};
pub use upload::{encode_data_url, publish, ImageUpload, UploadDraft, UploadOutcome, UploadRequest};
pub use contact::{ContactField, ContactForm, FieldError};
pub use counter::{format_thousands, CounterAnimation};
pub use modal::{ModalGeneration, ModalTicket};
