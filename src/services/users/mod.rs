//! 사용자 서비스 모듈
//!
//! 회원가입과 프로필 관리를 담당합니다.

pub mod password_validation;
pub mod registration_service;
pub mod user_service;

pub use registration_service::{AcceptedUser, RegistrationService};
pub use user_service::UserService;
