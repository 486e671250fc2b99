//! # 계정 핸들러
//!
//! 회원가입, 로그인, 로그아웃 화면을 처리합니다.
//!
//! | 메서드 | 경로 | 결과 |
//! |--------|------|------|
//! | `GET` | `/accounts/signup/` | 200 빈 폼 |
//! | `POST` | `/accounts/signup/` | 302 → 홈 (세션 시작) / 200 폼 + 에러 |
//! | `GET` | `/accounts/login/` | 200 빈 폼 |
//! | `POST` | `/accounts/login/` | 302 → `next` 또는 홈 / 200 폼 + 에러 |
//! | `GET`, `POST` | `/accounts/logout/` | 302 → 로그인 페이지 |
//!
//! 폼 에러는 에러 응답이 아니라 200 폼 컨텍스트로 렌더링됩니다.

use actix_web::{get, post, route, web, HttpResponse};
use serde::Deserialize;

use crate::{
    config::AccountUrls,
    core::AppState,
    domain::{
        dto::users::{
            request::{LoginRequest, SignupRequest},
            response::{templates, FormContext},
        },
        models::auth::OptionalUser,
    },
    errors::{AppError, FormError},
    handlers::session::{redirect_clearing_session, redirect_with_session, safe_next},
};

/// 로그인 후 돌아갈 경로
#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

#[get("/signup/")]
pub async fn signup_form() -> HttpResponse {
    HttpResponse::Ok().json(FormContext::blank(templates::SIGNUP))
}

/// 회원가입 처리
///
/// 성공하면 바로 로그인 세션을 시작하고 홈으로 이동합니다.
#[post("/signup/")]
pub async fn signup(
    state: web::Data<AppState>,
    form: web::Form<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let request = form.into_inner();

    match state.registration.register(&request).await {
        Ok(user) => {
            let session = state.auth.start_session(&user)?;
            Ok(redirect_with_session(AccountUrls::HOME, &session))
        }
        Err(FormError::Invalid(errors)) => Ok(HttpResponse::Ok().json(FormContext::with_errors(
            templates::SIGNUP,
            request.redisplay_data(),
            &errors,
            state.messages.as_ref(),
        ))),
        Err(FormError::App(e)) => Err(e),
    }
}

#[get("/login/")]
pub async fn login_form(query: web::Query<NextQuery>) -> HttpResponse {
    match &query.next {
        Some(next) => HttpResponse::Ok().json(FormContext::prefilled(
            templates::LOGIN,
            serde_json::json!({ "next": next }),
        )),
        None => HttpResponse::Ok().json(FormContext::blank(templates::LOGIN)),
    }
}

/// 로그인 처리
#[post("/login/")]
pub async fn login(
    state: web::Data<AppState>,
    query: web::Query<NextQuery>,
    form: web::Form<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = form.into_inner();

    match state.auth.authenticate(&request).await {
        Ok(user) => {
            let session = state.auth.start_session(&user)?;
            Ok(redirect_with_session(safe_next(query.next.as_deref()), &session))
        }
        Err(FormError::Invalid(errors)) => Ok(HttpResponse::Ok().json(FormContext::with_errors(
            templates::LOGIN,
            request.redisplay_data(),
            &errors,
            state.messages.as_ref(),
        ))),
        Err(FormError::App(e)) => Err(e),
    }
}

/// 로그아웃 처리
///
/// 로그인 상태가 아니어도 쿠키를 지우고 로그인 페이지로 이동합니다.
#[route("/logout/", method = "GET", method = "POST")]
pub async fn logout(
    state: web::Data<AppState>,
    user: OptionalUser,
) -> Result<HttpResponse, AppError> {
    if let OptionalUser(Some(user)) = user {
        state.auth.logout(&user).await?;
    }

    Ok(redirect_clearing_session(AccountUrls::LOGIN))
}
