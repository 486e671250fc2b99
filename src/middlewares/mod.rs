//! 미들웨어 모듈
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - 세션 쿠키 또는 Bearer 헤더의 토큰 검증
//! - 폐기된 세션, 삭제된 사용자 거부
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/tweets")
//!             .wrap(AuthMiddleware::required()) // 비로그인 → /accounts/login/?next=...
//!             .route("/home/", web::get().to(home))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
