//! 프로필 수정 요청 DTO
//!
//! `username`/`email`은 회원가입과 같은 형식 규칙을 따릅니다.
//! 사용자명 중복 검사(본인 제외)는 `UserService`에서 수행합니다.

use serde::Deserialize;
use validator::Validate;

use super::signup_request::{to_field_errors, validate_email_field, validate_username};
use crate::domain::models::forms::FieldErrors;
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

/// 프로필 수정 폼
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileEditRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(max = 150, code = "username_too_long"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,

    /// 자기소개 (선택)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bio: Option<String>,
}

impl ProfileEditRequest {
    pub fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => to_field_errors(&errors, |field| match field {
                "username" => self.username.as_str(),
                "email" => self.email.as_str(),
                _ => "",
            }),
        }
    }

    pub fn redisplay_data(&self) -> serde_json::Value {
        serde_json::json!({
            "username": self.username,
            "email": self.email,
            "bio": self.bio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::forms::FieldErrorKind;

    #[test]
    fn test_bio_is_optional() {
        let form: ProfileEditRequest =
            serde_json::from_str(r#"{"username": "test", "email": "test@example.com", "bio": "  "}"#).unwrap();

        assert!(form.field_errors().is_empty());
        assert_eq!(form.bio, None);
    }

    #[test]
    fn test_same_format_rules_as_signup() {
        let form = ProfileEditRequest {
            username: "bad name".into(),
            email: "test.example.com".into(),
            bio: None,
        };
        let errors = form.field_errors();

        assert_eq!(errors.get("username"), &[FieldErrorKind::InvalidUsername]);
        assert_eq!(errors.get("email"), &[FieldErrorKind::InvalidEmail]);
    }
}
