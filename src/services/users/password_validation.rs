//! 비밀번호 강도 검증
//!
//! 회원가입 시 `password2`에 적용되는 검증기 목록입니다.
//! 기본 순서는 사용자 속성 유사도 → 최소 길이 → 숫자 전용이며,
//! 실패한 검증기의 에러가 이 순서대로 모두 보고됩니다.
//!
//! ```rust,ignore
//! let attrs = UserAttributes { username: Some("testuser"), email: Some("test@example.com") };
//! let errors = validate_password("testuser", &attrs, &default_validators());
//! assert_eq!(errors[0], FieldErrorKind::PasswordTooSimilar { attribute: UserAttribute::Username });
//! ```

use std::collections::HashMap;

use crate::domain::models::forms::{FieldErrorKind, UserAttribute};

/// 유사도 비교 대상이 되는 사용자 속성
///
/// 형식 검증에 실패한 속성은 `None`으로 전달되어 비교에서 제외됩니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserAttributes<'a> {
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
}

/// 비밀번호 검증기
pub trait PasswordValidator: Send + Sync {
    /// 규칙을 위반하면 에러 종류를 반환합니다.
    fn validate(&self, password: &str, attributes: &UserAttributes<'_>) -> Option<FieldErrorKind>;
}

/// 사용자 속성과 지나치게 비슷한 비밀번호를 거부합니다.
///
/// 비밀번호와 속성값(및 `\W+`로 나눈 각 부분)을 소문자로 비교하여
/// `2·M / (|a| + |b|)` (M: 공통 문자 수, 중복 포함)가 `max_similarity` 이상이면 실패합니다.
pub struct UserAttributeSimilarityValidator {
    pub max_similarity: f64,
}

impl Default for UserAttributeSimilarityValidator {
    fn default() -> Self {
        Self { max_similarity: 0.7 }
    }
}

impl UserAttributeSimilarityValidator {
    /// 속성 조각이 비밀번호에 비해 너무 짧아 비교할 의미가 없는지 확인합니다.
    fn exceeds_maximum_length_ratio(&self, password_len: usize, value_len: usize) -> bool {
        let length_bound_similarity = self.max_similarity / 2.0 * password_len as f64;
        password_len >= 10 * value_len && (value_len as f64) < length_bound_similarity
    }

    fn is_too_similar(&self, password: &str, value: &str) -> bool {
        let value = value.to_lowercase();
        let password_len = password.chars().count();

        let mut parts: Vec<&str> = value
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .collect();
        parts.push(value.as_str());

        parts.into_iter().any(|part| {
            !self.exceeds_maximum_length_ratio(password_len, part.chars().count())
                && quick_ratio(password, part) >= self.max_similarity
        })
    }
}

impl PasswordValidator for UserAttributeSimilarityValidator {
    fn validate(&self, password: &str, attributes: &UserAttributes<'_>) -> Option<FieldErrorKind> {
        let password = password.to_lowercase();

        let candidates = [
            (UserAttribute::Username, attributes.username),
            (UserAttribute::Email, attributes.email),
        ];

        candidates
            .into_iter()
            .filter_map(|(attribute, value)| value.filter(|v| !v.is_empty()).map(|v| (attribute, v)))
            .find(|(_, value)| self.is_too_similar(&password, value))
            .map(|(attribute, _)| FieldErrorKind::PasswordTooSimilar { attribute })
    }
}

/// 최소 길이(문자 수) 미만의 비밀번호를 거부합니다.
pub struct MinimumLengthValidator {
    pub min_length: usize,
}

impl Default for MinimumLengthValidator {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordValidator for MinimumLengthValidator {
    fn validate(&self, password: &str, _: &UserAttributes<'_>) -> Option<FieldErrorKind> {
        (password.chars().count() < self.min_length)
            .then_some(FieldErrorKind::PasswordTooShort { min: self.min_length })
    }
}

/// 숫자로만 이루어진 비밀번호를 거부합니다.
#[derive(Default)]
pub struct NumericPasswordValidator;

impl PasswordValidator for NumericPasswordValidator {
    fn validate(&self, password: &str, _: &UserAttributes<'_>) -> Option<FieldErrorKind> {
        (!password.is_empty() && password.chars().all(|c| c.is_ascii_digit()))
            .then_some(FieldErrorKind::PasswordAllNumeric)
    }
}

/// 기본 검증기 목록 (유사도 → 최소 길이 → 숫자 전용)
pub fn default_validators() -> Vec<Box<dyn PasswordValidator>> {
    vec![
        Box::new(UserAttributeSimilarityValidator::default()),
        Box::new(MinimumLengthValidator::default()),
        Box::new(NumericPasswordValidator),
    ]
}

/// 모든 검증기를 순서대로 실행하고 실패 목록을 반환합니다.
pub fn validate_password(
    password: &str,
    attributes: &UserAttributes<'_>,
    validators: &[Box<dyn PasswordValidator>],
) -> Vec<FieldErrorKind> {
    validators
        .iter()
        .filter_map(|validator| validator.validate(password, attributes))
        .collect()
}

/// 두 문자열의 문자 다중집합 기반 유사도 상한
///
/// 순서를 무시하고 공통 문자 수만으로 계산합니다. 둘 다 비어 있으면 1.0.
fn quick_ratio(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a + len_b == 0 {
        return 1.0;
    }

    let mut available: HashMap<char, usize> = HashMap::new();
    for c in b.chars() {
        *available.entry(c).or_insert(0) += 1;
    }

    let mut matches = 0usize;
    for c in a.chars() {
        if let Some(count) = available.get_mut(&c) {
            if *count > 0 {
                *count -= 1;
                matches += 1;
            }
        }
    }

    2.0 * matches as f64 / (len_a + len_b) as f64
}
