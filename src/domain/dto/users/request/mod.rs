//! # 사용자 관련 요청 DTO 모듈
//!
//! 계정 화면의 폼 데이터를 구조화된 Rust 타입으로 변환하고 형식을 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: `serde` 역직렬화 (누락 필드는 빈 문자열)
//! 2. **형식 검증**: `validator` derive + 커스텀 함수 (필수, 이메일, 사용자명 문자)
//! 3. **비즈니스 검증**: 서비스 계층 (사용자명 중복, 비밀번호 강도)
//!
//! 검증 실패는 HTTP 에러가 아니라 [`FieldErrors`](crate::domain::models::forms::FieldErrors)로
//! 반환되어 폼과 함께 다시 렌더링됩니다.

pub mod signup_request;
pub mod login_request;
pub mod profile_edit_request;

pub use signup_request::SignupRequest;
pub use login_request::LoginRequest;
pub use profile_edit_request::ProfileEditRequest;
