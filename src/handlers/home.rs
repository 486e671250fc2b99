//! 홈 화면과 헬스 체크

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::{
    core::AppState,
    domain::{
        dto::users::response::{templates, PageContext, UserSummary},
        models::auth::AuthenticatedUser,
    },
    errors::AppError,
};

/// 로그인/회원가입 후 도착하는 홈 화면
#[get("/home/")]
pub async fn home(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let current = state.user_service.get_by_username(&user.username).await?;

    Ok(HttpResponse::Ok().json(PageContext::new(
        templates::HOME,
        json!({ "user": UserSummary::from(&current) }),
    )))
}

/// 서버 상태 확인
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "sns_accounts_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
