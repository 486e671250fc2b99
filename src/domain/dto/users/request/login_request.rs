//! 로그인 요청 DTO

use serde::Deserialize;
use validator::Validate;

use super::signup_request::{to_field_errors, validate_required};
use crate::domain::models::forms::FieldErrors;
use crate::utils::string_utils::deserialize_trimmed_string;

/// 로그인 폼
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_required"))]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub password: String,
}

impl LoginRequest {
    /// 필수 항목 검증 결과
    pub fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => to_field_errors(&errors, |_| ""),
        }
    }

    pub fn redisplay_data(&self) -> serde_json::Value {
        serde_json::json!({ "username": self.username })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::forms::FieldErrorKind;

    #[test]
    fn test_login_requires_both_fields() {
        let errors = LoginRequest::default().field_errors();

        assert_eq!(errors.get("username"), &[FieldErrorKind::Required]);
        assert_eq!(errors.get("password"), &[FieldErrorKind::Required]);
    }

    #[test]
    fn test_login_fields_present() {
        let request = LoginRequest { username: "test".into(), password: "goodpass".into() };
        assert!(request.field_errors().is_empty());
    }
}
