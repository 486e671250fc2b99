//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 객체 (User, Follow)
//! ├── dto       - 폼 요청 / 화면 응답
//! └── models    - 인증 사용자, 세션 클레임, 폼 에러
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
