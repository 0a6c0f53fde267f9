//! お問い合わせフォームの入力検証

use regex::Regex;

pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 1000;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9+\-() ]{7,20}$").unwrap();
}

/// 検証対象のフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    /// 入力要素のid
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// 失敗したフィールドをフォーム順に返す。空なら送信可能
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < 2 {
            errors.push(FieldError {
                field: ContactField::Name,
                message: "Please enter your full name",
            });
        }

        if !validate_email(&self.email) {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "Please enter a valid email address",
            });
        }

        let phone = self.phone.trim();
        if !phone.is_empty() && !PHONE_RE.is_match(phone) {
            errors.push(FieldError {
                field: ContactField::Phone,
                message: "Please enter a valid phone number",
            });
        }

        if self.subject.trim().is_empty() {
            errors.push(FieldError {
                field: ContactField::Subject,
                message: "Please select a subject",
            });
        }

        let len = self.message.trim().chars().count();
        if len < MESSAGE_MIN_LEN {
            errors.push(FieldError {
                field: ContactField::Message,
                message: "Message must be at least 10 characters",
            });
        } else if len > MESSAGE_MAX_LEN {
            errors.push(FieldError {
                field: ContactField::Message,
                message: "Message must be 1000 characters or fewer",
            });
        }

        errors
    }

    pub fn error_for(errors: &[FieldError], field: ContactField) -> Option<&'static str> {
        errors.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

/// ニュースレター登録にも使うメール形式チェック
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// 文字数カウンタの表示 (`"12 / 1000"`)
pub fn character_count(message: &str) -> String {
    format!("{} / {}", message.chars().count(), MESSAGE_MAX_LEN)
}

/// 残り文字数が少ないときの警告表示用
pub fn near_limit(message: &str) -> bool {
    message.chars().count() > MESSAGE_MAX_LEN * 9 / 10
}
