//! 폼 검증 모델
//!
//! 필드 단위 에러([`FieldErrors`])와 교체 가능한 메시지 카탈로그
//! ([`MessageCatalog`])를 제공합니다.

pub mod field_errors;
pub mod messages;

pub use field_errors::{FieldErrorKind, FieldErrors, UserAttribute, NON_FIELD_ERRORS};
pub use messages::{JapaneseMessages, MessageCatalog};
