//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 사용자 입력 오류(필수 항목 누락, 중복 사용자명 등)는 에러 응답이 아니라
//! 폼 재렌더링으로 처리되어야 하므로 [`FormError::Invalid`]로 분리됩니다.
//! 핸들러는 `FormError::Invalid`를 200 응답의 폼 컨텍스트로 렌더링하고,
//! 나머지는 [`AppError`]로 전파합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, FormError};
//!
//! match registration_service.register(form).await {
//!     Ok(user) => redirect_home(user),
//!     Err(FormError::Invalid(errors)) => render_form(errors),
//!     Err(FormError::App(e)) => Err(e),
//! }
//! ```

use actix_web::http::{header, StatusCode};
use thiserror::Error;

use crate::domain::models::forms::FieldErrors;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 요청 자체가 처리 불가능한 경우 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 저장소의 유니크 제약 위반을 나타냅니다. 회원가입/프로필 수정 경로에서는
    /// 서비스 계층이 이 에러를 사용자명 필드 에러로 변환합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 로그인이 필요한 페이지에 비로그인 상태로 접근 (302 → 로그인 페이지)
    #[error("Login required: {next}")]
    LoginRequired {
        /// 로그인 후 돌아갈 경로
        next: String,
    },

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 로그인 페이지 리디렉션 URL을 생성합니다.
    pub fn login_redirect_location(next: &str) -> String {
        format!("/accounts/login/?next={}", urlencoding::encode(next))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::LoginRequired { .. } => StatusCode::FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// 인프라 에러의 상세 내용은 로그에만 남기고 응답에는 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if let AppError::LoginRequired { next } = self {
            return actix_web::HttpResponse::build(status)
                .insert_header((header::LOCATION, Self::login_redirect_location(next)))
                .finish();
        }

        let message = match self {
            _ if status.is_server_error() => {
                log::error!("{}", self);
                "Internal server error".to_string()
            }
            // 사용자에게 보여줄 문구 그대로 전달
            AppError::ValidationError(message) => message.clone(),
            _ => self.to_string(),
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 폼 처리 결과 에러
///
/// 필드 검증 실패와 시스템 에러를 구분합니다.
#[derive(Error, Debug)]
pub enum FormError {
    /// 사용자 입력 오류 (폼을 에러와 함께 다시 렌더링)
    #[error("form rejected: {0:?}")]
    Invalid(FieldErrors),

    /// 시스템 에러
    #[error(transparent)]
    App(#[from] AppError),
}

/// 폼 처리용 Result 타입 별칭
pub type FormResult<T> = Result<T, FormError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[actix_web::test]
    async fn test_validation_error_response() {
        let error = AppError::ValidationError("自分自身をフォローすることはできません。".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "自分自身をフォローすることはできません。");
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Not your profile".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_internal_error_response_hides_details() {
        let error = AppError::DatabaseError("connection refused on 10.0.0.3".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_login_required_redirects_with_next() {
        let error = AppError::LoginRequired { next: "/accounts/alice/edit/".to_string() };
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        let location = response.headers().get(header::LOCATION).unwrap().to_str().unwrap();
        assert_eq!(location, "/accounts/login/?next=%2Faccounts%2Falice%2Fedit%2F");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_form_error_wraps_app_error() {
        let form_error: FormError = AppError::RedisError("down".to_string()).into();
        assert!(matches!(form_error, FormError::App(AppError::RedisError(_))));
    }
}
