//! # 회원가입 요청 DTO
//!
//! 회원가입 폼(`application/x-www-form-urlencoded`)을 표현합니다.
//!
//! ## 검증 규칙
//!
//! 이 DTO는 **입력 형식만** 검증합니다. 사용자명 중복과 비밀번호 강도는
//! 저장소와 사용자 속성이 필요하므로 `RegistrationService`에서 검사합니다.
//!
//! | 필드 | 규칙 | 에러 코드 |
//! |------|------|-----------|
//! | `username` | 필수, 150자 이하, 문자/숫자/`@.+-_`만 | `required`, `username_too_long`, `invalid_username` |
//! | `email` | 필수, 이메일 형식 | `required`, `invalid_email` |
//! | `password1` | 필수 | `required` |
//! | `password2` | 필수 | `required` |
//!
//! `username`과 `email`은 역직렬화 시 앞뒤 공백이 제거되며, 비밀번호는 그대로 유지됩니다.

use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::domain::models::forms::{field_errors::kind_from_code, FieldErrors};
use crate::utils::string_utils::{deserialize_trimmed_string, is_empty_input};

/// 회원가입 폼
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupRequest {
    /// 사용자명
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(max = 150, code = "username_too_long"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 이메일 주소
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,

    /// 비밀번호
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub password1: String,

    /// 비밀번호 확인
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub password2: String,
}

impl SignupRequest {
    /// 형식 검증을 수행하고 결과를 필드 에러로 변환합니다.
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

    /// 에러와 함께 되돌려줄 폼 데이터 (비밀번호 제외)
    pub fn redisplay_data(&self) -> serde_json::Value {
        serde_json::json!({
            "username": self.username,
            "email": self.email,
        })
    }
}

/// `validator` 결과를 필드 에러로 변환합니다.
///
/// `value_of`는 길이 초과 메시지에 필요한 현재 값을 조회합니다.
pub(crate) fn to_field_errors<'a, F>(errors: &ValidationErrors, value_of: F) -> FieldErrors
where
    F: Fn(&str) -> &'a str,
{
    let mut field_errors = FieldErrors::new();

    // HashMap 순회 순서와 무관하게 필드별 결과는 BTreeMap에 정렬되어 저장됨
    for (field, errors) in errors.field_errors() {
        for error in errors.iter() {
            if let Some(kind) = kind_from_code(&error.code, value_of(field.as_ref())) {
                field_errors.add(field.as_ref(), kind);
            }
        }
    }

    field_errors.collapse_required();
    field_errors
}

/// 필수 입력 검증
pub(crate) fn validate_required(value: &str) -> Result<(), ValidationError> {
    if is_empty_input(value) {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// 사용자명 검증: 필수 + 허용 문자 (문자, 숫자, `@ . + - _`)
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    validate_required(username)?;

    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_');
    if !username.chars().all(allowed) {
        return Err(ValidationError::new("invalid_username"));
    }
    Ok(())
}

/// 이메일 검증: 필수 + 형식
pub(crate) fn validate_email_field(email: &str) -> Result<(), ValidationError> {
    validate_required(email)?;

    if !email.validate_email() {
        return Err(ValidationError::new("invalid_email"));
    }

    // 도메인에는 최상위 도메인이 있어야 함 (localhost 제외)
    let domain = email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or_default();
    if !domain.contains('.') && !domain.eq_ignore_ascii_case("localhost") {
        return Err(ValidationError::new("invalid_email"));
    }
    Ok(())
}
