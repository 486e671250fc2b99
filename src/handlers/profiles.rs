//! # 프로필 핸들러
//!
//! | 메서드 | 경로 | 결과 |
//! |--------|------|------|
//! | `GET` | `/accounts/{username}/` | 200 / 404 |
//! | `GET` | `/accounts/{username}/edit/` | 200 / 302 (비로그인) / 403 / 404 |
//! | `POST` | `/accounts/{username}/edit/` | 302 → 프로필 / 200 폼 + 에러 / 403 / 404 |

use actix_web::{get, post, web, HttpResponse};

use crate::{
    config::AccountUrls,
    core::AppState,
    domain::{
        dto::users::{
            request::ProfileEditRequest,
            response::{templates, FormContext, PageContext},
        },
        models::auth::{AuthenticatedUser, OptionalUser},
    },
    errors::{AppError, FormError},
    handlers::session::redirect,
};

/// 프로필 조회
#[get("/{username}/")]
pub async fn profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    viewer: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let profile = state.user_service.get_profile(&path, viewer.0.as_ref()).await?;
    Ok(HttpResponse::Ok().json(PageContext::new(templates::PROFILE, profile)))
}

#[get("/{username}/edit/")]
pub async fn profile_edit_form(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let target = state.user_service.authorize_edit(&path, &user).await?;

    Ok(HttpResponse::Ok().json(FormContext::prefilled(
        templates::PROFILE_EDIT,
        serde_json::json!({
            "username": target.username,
            "email": target.email,
            "bio": target.bio,
        }),
    )))
}

/// 프로필 수정
///
/// 성공하면 (바뀌었을 수 있는) 새 사용자명의 프로필로 이동합니다.
#[post("/{username}/edit/")]
pub async fn profile_edit(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    form: web::Form<ProfileEditRequest>,
) -> Result<HttpResponse, AppError> {
    let request = form.into_inner();

    match state.user_service.edit_profile(&path, &user, &request).await {
        Ok(updated) => Ok(redirect(&AccountUrls::profile(&updated.username))),
        Err(FormError::Invalid(errors)) => Ok(HttpResponse::Ok().json(FormContext::with_errors(
            templates::PROFILE_EDIT,
            request.redisplay_data(),
            &errors,
            state.messages.as_ref(),
        ))),
        Err(FormError::App(e)) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{create_user, init_app, login_cookie, test_state};
    use actix_web::{http::header, http::StatusCode, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_profile_success() {
        let state = test_state();
        create_user(&state, "test", "goodpass").await;
        let app = init_app!(state).await;

        let req = test::TestRequest::get().uri("/accounts/test/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["template"], "accounts/profile.html");
        assert_eq!(body["user"]["username"], "test");
        assert_eq!(body["follower_count"], 0);
        assert_eq!(body["is_own_profile"], false);
    }

    #[actix_web::test]
    async fn test_profile_not_found() {
        let app = init_app!(test_state()).await;
        let req = test::TestRequest::get().uri("/accounts/ghost/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_profile_edit_requires_login() {
        let state = test_state();
        create_user(&state, "test", "goodpass").await;
        let app = init_app!(state).await;

        let req = test::TestRequest::get().uri("/accounts/test/edit/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/accounts/login/?next=%2Faccounts%2Ftest%2Fedit%2F"
        );
    }

    #[actix_web::test]
    async fn test_profile_edit_page_prefilled() {
        let state = test_state();
        let cookie = login_cookie(&state, "test", "goodpass").await;
        let app = init_app!(state).await;

        let req = test::TestRequest::get().uri("/accounts/test/edit/").cookie(cookie).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["template"], "accounts/profile_edit.html");
        assert_eq!(body["form"]["data"]["email"], "test@example.com");
    }

    #[actix_web::test]
    async fn test_profile_edit_incorrect_user() {
        let state = test_state();
        create_user(&state, "other", "goodpass").await;
        let cookie = login_cookie(&state, "test", "goodpass").await;
        let app = init_app!(state.clone()).await;

        let req = test::TestRequest::post()
            .uri("/accounts/other/edit/")
            .cookie(cookie)
            .set_form([("username", "hacked"), ("email", "hacked@example.com"), ("bio", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(state.users.find_by_username("other").await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_profile_edit_unknown_user() {
        let state = test_state();
        let cookie = login_cookie(&state, "test", "goodpass").await;
        let app = init_app!(state).await;

        let req = test::TestRequest::get().uri("/accounts/ghost/edit/").cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_profile_edit_success() {
        let state = test_state();
        let cookie = login_cookie(&state, "test", "goodpass").await;
        let app = init_app!(state.clone()).await;

        let req = test::TestRequest::post()
            .uri("/accounts/test/edit/")
            .cookie(cookie.clone())
            .set_form([("username", "renamed"), ("email", "renamed@example.com"), ("bio", "こんにちは")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/accounts/renamed/");

        let user = state.users.find_by_username("renamed").await.unwrap().unwrap();
        assert_eq!(user.email, "renamed@example.com");
        assert_eq!(user.bio.as_deref(), Some("こんにちは"));

        let req = test::TestRequest::get().uri("/accounts/renamed/edit/").cookie(cookie).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_profile_edit_duplicate_username() {
        let state = test_state();
        create_user(&state, "other", "goodpass").await;
        let cookie = login_cookie(&state, "test", "goodpass").await;
        let app = init_app!(state.clone()).await;

        let req = test::TestRequest::post()
            .uri("/accounts/test/edit/")
            .cookie(cookie)
            .set_form([("username", "other"), ("email", "test@example.com"), ("bio", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["form"]["errors"]["username"][0], "同じユーザー名が既に登録済みです。");
        assert!(state.users.find_by_username("test").await.unwrap().is_some());
    }
}
