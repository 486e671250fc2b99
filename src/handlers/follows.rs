//! # 팔로우 핸들러
//!
//! 모든 엔드포인트는 로그인이 필요합니다.
//!
//! | 메서드 | 경로 | 결과 |
//! |--------|------|------|
//! | `POST` | `/accounts/{username}/follow/` | 302 → 홈 / 400 (자기 자신) / 404 |
//! | `POST` | `/accounts/{username}/unfollow/` | 302 → 홈 / 400 (자기 자신) / 404 |
//! | `GET` | `/accounts/{username}/following/` | 200 / 404 |
//! | `GET` | `/accounts/{username}/follower/` | 200 / 404 |

use actix_web::{get, post, web, HttpResponse};

use crate::{
    config::AccountUrls,
    core::AppState,
    domain::{
        dto::users::response::{templates, PageContext},
        models::auth::AuthenticatedUser,
    },
    errors::AppError,
    handlers::session::redirect,
};

#[post("/{username}/follow/")]
pub async fn follow(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.follow_service.follow(&user, &path).await?;
    Ok(redirect(AccountUrls::HOME))
}

#[post("/{username}/unfollow/")]
pub async fn unfollow(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.follow_service.unfollow(&user, &path).await?;
    Ok(redirect(AccountUrls::HOME))
}

/// 팔로잉 목록
#[get("/{username}/following/")]
pub async fn following_list(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let list = state.follow_service.following_list(&path).await?;
    Ok(HttpResponse::Ok().json(PageContext::new(templates::FOLLOWING_LIST, list)))
}

/// 팔로워 목록
#[get("/{username}/follower/")]
pub async fn follower_list(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let list = state.follow_service.follower_list(&path).await?;
    Ok(HttpResponse::Ok().json(PageContext::new(templates::FOLLOWER_LIST, list)))
}
