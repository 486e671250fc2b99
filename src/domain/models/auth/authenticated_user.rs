use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;

use crate::errors::AppError;

/// 세션 토큰에서 확인된 로그인 사용자
///
/// 인증 미들웨어가 요청 extensions에 저장합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: ObjectId,

    /// 로그인 시점의 사용자명
    pub username: String,

    /// 세션 식별자 (JWT `jti`)
    pub session_id: String,

    /// 세션 만료 시각 (Unix timestamp)
    pub expires_at: i64,
}

impl AuthenticatedUser {
    /// 대상 사용자가 본인인지 확인
    pub fn is(&self, user_id: &ObjectId) -> bool {
        &self.user_id == user_id
    }
}

/// 로그인 필수 추출자
///
/// 로그인하지 않은 경우 현재 경로를 `next`로 담아 로그인 페이지로 리디렉션합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => {
                let next = req
                    .uri()
                    .path_and_query()
                    .map(|pq| pq.as_str().to_string())
                    .unwrap_or_else(|| req.path().to_string());
                ready(Err(AppError::LoginRequired { next }.into()))
            }
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test};

    fn sample_user() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: ObjectId::new(),
            username: "test".to_string(),
            session_id: "jti".to_string(),
            expires_at: 0,
        }
    }

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let req = test::TestRequest::default().to_http_request();
        let user = sample_user();
        req.extensions_mut().insert(user.clone());

        let extracted = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(extracted, user);
    }

    #[actix_web::test]
    async fn test_missing_user_redirects_to_login() {
        let req = test::TestRequest::get().uri("/accounts/test/edit/").to_http_request();

        let error = AuthenticatedUser::extract(&req).await.unwrap_err();
        let response = error.as_response_error().error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/accounts/login/?next=%2Faccounts%2Ftest%2Fedit%2F"
        );
    }

    #[actix_web::test]
    async fn test_optional_user_without_login() {
        let req = test::TestRequest::default().to_http_request();
        let OptionalUser(user) = OptionalUser::extract(&req).await.unwrap();
        assert!(user.is_none());
    }
}
