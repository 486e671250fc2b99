//! # Data Transfer Objects Module
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 데이터 구조입니다.
//! 엔티티를 그대로 노출하지 않고, 화면에 필요한 필드만 담습니다.

pub mod users;

pub use users::*;
