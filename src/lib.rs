//! SNS 계정 서비스 백엔드
//!
//! 회원가입, 로그인/로그아웃, 프로필 조회/수정, 팔로우 관계를 제공하는 actix-web 서비스입니다.
//! 화면은 JSON 컨텍스트(`template` + 데이터/폼 에러)로 응답하며,
//! 폼 에러 메시지는 일본어 카탈로그로 렌더링됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Routes      │ ← /accounts, /tweets, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← 세션 쿠키 → AuthenticatedUser
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 폼 파싱, 리디렉션, 화면 컨텍스트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 회원가입 검증, 인증, 프로필, 팔로우
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / FollowStore / SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 또는 인메모리
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
mod test_support;
