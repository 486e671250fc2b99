//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::config::SessionConfig;
use crate::core::AppState;
use crate::domain::models::auth::{AuthMode, AuthenticatedUser};
use crate::errors::{AppError, AppResult};
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            let user = match resolve_user(&req).await {
                Ok(user) => user,
                Err(e) => {
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, e.error_response()).map_into_right_body());
                }
            };

            match (mode, user) {
                (_, Some(user)) => {
                    log::debug!("세션 인증: {}", user.username);
                    req.extensions_mut().insert(user);
                }
                (AuthMode::Required, None) => {
                    let next = req
                        .uri()
                        .path_and_query()
                        .map(|pq| pq.as_str().to_string())
                        .unwrap_or_else(|| req.path().to_string());
                    log::debug!("로그인 필요: {}", next);

                    let response = AppError::LoginRequired { next }.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                (AuthMode::Optional, None) => {}
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 세션 토큰을 찾아 로그인 사용자로 해석합니다.
///
/// 세션 쿠키를 먼저 보고, 없으면 `Authorization: Bearer` 헤더를 봅니다.
async fn resolve_user(req: &ServiceRequest) -> AppResult<Option<AuthenticatedUser>> {
    let Some(token) = extract_token(req) else {
        return Ok(None);
    };

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("AppState가 등록되지 않았습니다".to_string()))?;

    state.auth.resolve(&token).await
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(&SessionConfig::cookie_name()) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| TokenService::extract_bearer_token(h).ok())
        .map(str::to_string)
}
