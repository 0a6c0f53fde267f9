//! UIコンポーネント

pub mod back_to_top;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod login_modal;
pub mod project_card;
pub mod project_modal;
pub mod projects;
pub mod statistics;
pub mod toast;
pub mod upload_modal;
