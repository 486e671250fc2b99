//! 필드 단위 검증 에러
//!
//! 폼 제출 한 건에 대해 필드 이름 → 에러 종류 목록을 누적합니다.
//! 에러 종류([`FieldErrorKind`])는 메시지 문자열이 아니라 의미만 담고,
//! 실제 문구는 [`MessageCatalog`](super::messages::MessageCatalog)가 결정합니다.

use std::collections::BTreeMap;

use serde::Serialize;

use super::messages::MessageCatalog;

/// 특정 필드에 속하지 않는 에러가 저장되는 키
pub const NON_FIELD_ERRORS: &str = "__all__";

/// 비밀번호 유사도 검사 대상이 되는 사용자 속성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAttribute {
    Username,
    Email,
}

/// 필드 에러 종류
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// 필수 항목 누락
    Required,
    /// 이미 존재하는 사용자명
    DuplicateUsername,
    /// 사용자명에 허용되지 않는 문자 포함
    InvalidUsername,
    /// 사용자명 길이 초과
    UsernameTooLong { max: usize, actual: usize },
    /// 이메일 형식 오류
    InvalidEmail,
    /// 비밀번호 최소 길이 미달
    PasswordTooShort { min: usize },
    /// 비밀번호가 사용자 속성과 지나치게 유사함
    PasswordTooSimilar { attribute: UserAttribute },
    /// 비밀번호가 숫자로만 구성됨
    PasswordAllNumeric,
    /// 비밀번호 확인 불일치
    PasswordMismatch,
    /// 로그인 실패 (사용자명 또는 비밀번호 불일치)
    InvalidLogin,
}

/// 폼 한 건의 필드 에러 집합
///
/// 같은 필드에 여러 에러가 붙을 수 있으며, 추가된 순서가 유지됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<FieldErrorKind>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드에 에러를 추가합니다.
    pub fn add(&mut self, field: &str, kind: FieldErrorKind) {
        self.errors.entry(field.to_string()).or_default().push(kind);
    }

    /// 특정 필드에 속하지 않는 에러를 추가합니다.
    pub fn add_non_field(&mut self, kind: FieldErrorKind) {
        self.add(NON_FIELD_ERRORS, kind);
    }

    /// 에러 하나만 가진 집합을 만듭니다.
    pub fn single(field: &str, kind: FieldErrorKind) -> Self {
        let mut errors = Self::new();
        errors.add(field, kind);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// 필드에 에러가 하나라도 있는지 확인합니다.
    pub fn has(&self, field: &str) -> bool {
        self.errors.get(field).is_some_and(|kinds| !kinds.is_empty())
    }

    /// 필드의 에러 목록 (없으면 빈 슬라이스)
    pub fn get(&self, field: &str) -> &[FieldErrorKind] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 에러가 있는 필드 이름들
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// 카탈로그로 메시지를 렌더링합니다.
    pub fn render(&self, catalog: &dyn MessageCatalog) -> BTreeMap<String, Vec<String>> {
        self.errors
            .iter()
            .map(|(field, kinds)| {
                let messages = kinds.iter().map(|kind| catalog.message(kind)).collect();
                (field.clone(), messages)
            })
            .collect()
    }

    /// 필수 항목 누락이 있는 필드는 나머지 에러를 제거합니다.
    ///
    /// 빈 값에 대해서는 "필수" 메시지 하나만 보여줍니다.
    pub fn collapse_required(&mut self) {
        for kinds in self.errors.values_mut() {
            if kinds.contains(&FieldErrorKind::Required) {
                kinds.retain(|kind| *kind == FieldErrorKind::Required);
            }
        }
    }
}

/// `validator` 크레이트의 에러 코드를 필드 에러 종류로 변환합니다.
///
/// 커스텀 검증 함수들이 사용하는 코드만 알고 있으며, 그 외 코드는 `None`.
pub fn kind_from_code(code: &str, value: &str) -> Option<FieldErrorKind> {
    match code {
        "required" => Some(FieldErrorKind::Required),
        "invalid_email" => Some(FieldErrorKind::InvalidEmail),
        "invalid_username" => Some(FieldErrorKind::InvalidUsername),
        "username_too_long" => Some(FieldErrorKind::UsernameTooLong {
            max: crate::domain::entities::users::user::USERNAME_MAX_LENGTH,
            actual: value.chars().count(),
        }),
        _ => None,
    }
}
