//! 애플리케이션 에러 모듈
//!
//! 인프라/HTTP 수준의 [`AppError`](errors::AppError)와
//! 폼 검증 결과를 표현하는 [`FormError`](errors::FormError)를 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext, FormError, FormResult};
