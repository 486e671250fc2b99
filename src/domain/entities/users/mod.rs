//! Users Entity Module
//!
//! 사용자 도메인 엔티티를 정의합니다.

pub mod user;

pub use user::{User, USERNAME_MAX_LENGTH};
