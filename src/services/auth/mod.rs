//! 인증 서비스 모듈
//!
//! bcrypt 비밀번호 해싱, HS256 세션 토큰, 로그인 세션 관리를 제공합니다.
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let user = auth_service.authenticate(&form).await?;
//! let session = auth_service.start_session(&user)?;
//! ```

pub mod password_service;
pub mod token_service;
pub mod auth_service;

pub use auth_service::AuthService;
pub use password_service::PasswordService;
pub use token_service::TokenService;
