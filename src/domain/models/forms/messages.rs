//! 에러 메시지 카탈로그
//!
//! 필드 에러 종류를 사용자에게 보여줄 문구로 바꿉니다.
//! 서비스는 일본어 화면을 기본으로 하므로 [`JapaneseMessages`]가 기본 구현이며,
//! 다른 언어가 필요하면 [`MessageCatalog`]를 구현해 `AppState`에 주입합니다.

use super::field_errors::{FieldErrorKind, UserAttribute};

/// 에러 종류 → 메시지 문자열 조회
pub trait MessageCatalog: Send + Sync {
    /// 에러 종류에 해당하는 메시지를 반환합니다.
    fn message(&self, kind: &FieldErrorKind) -> String;

    /// 자기 자신 팔로우 거부 메시지
    fn self_follow(&self) -> String;

    /// 자기 자신 언팔로우 거부 메시지
    fn self_unfollow(&self) -> String;
}

/// 일본어 메시지 카탈로그 (기본값)
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseMessages;

impl JapaneseMessages {
    fn attribute_name(attribute: UserAttribute) -> &'static str {
        match attribute {
            UserAttribute::Username => "ユーザー名",
            UserAttribute::Email => "メールアドレス",
        }
    }
}

impl MessageCatalog for JapaneseMessages {
    fn message(&self, kind: &FieldErrorKind) -> String {
        match kind {
            FieldErrorKind::Required => "このフィールドは必須です。".to_string(),
            FieldErrorKind::DuplicateUsername => "同じユーザー名が既に登録済みです。".to_string(),
            FieldErrorKind::InvalidUsername => {
                "有効なユーザー名を入力してください。この値は文字、数字、および @/./+/-/_ のみを含むことができます。"
                    .to_string()
            }
            FieldErrorKind::UsernameTooLong { max, actual } => {
                format!("この値が {} 文字以下であることを確認してください( {} 文字になっています)。", max, actual)
            }
            FieldErrorKind::InvalidEmail => "有効なメールアドレスを入力してください。".to_string(),
            FieldErrorKind::PasswordTooShort { min } => {
                format!("このパスワードは短すぎます。最低 {} 文字以上必要です。", min)
            }
            FieldErrorKind::PasswordTooSimilar { attribute } => {
                format!("このパスワードは {} と似すぎています。", Self::attribute_name(*attribute))
            }
            FieldErrorKind::PasswordAllNumeric => "このパスワードは数字しか使われていません。".to_string(),
            FieldErrorKind::PasswordMismatch => "確認用パスワードが一致しません。".to_string(),
            FieldErrorKind::InvalidLogin => {
                "正しいユーザー名とパスワードを入力してください。どちらのフィールドも大文字と小文字は区別されます。"
                    .to_string()
            }
        }
    }

    fn self_follow(&self) -> String {
        "自分自身をフォローすることはできません。".to_string()
    }

    fn self_unfollow(&self) -> String {
        "自分自身のフォローを解除することはできません。".to_string()
    }
}
