//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델들입니다.
//!
//! - [`auth`] - 로그인 사용자 추출자와 인증 모드
//! - [`token`] - 세션 JWT 클레임
//! - [`forms`] - 필드 에러와 메시지 카탈로그

pub mod auth;
pub mod token;
pub mod forms;
