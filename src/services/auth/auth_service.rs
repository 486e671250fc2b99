//! # 로그인 세션 서비스
//!
//! 로그인 폼 인증, 세션 토큰 발급, 로그아웃(세션 폐기), 요청 토큰 해석을 담당합니다.
//!
//! ## 세션 수명
//!
//! ```text
//! authenticate → start_session → (쿠키) → resolve ... → logout
//!                     │                                   │
//!                  JWT 발급                          jti 폐기 등록
//! ```
//!
//! 폐기 기록은 토큰의 남은 유효 기간 동안만 유지됩니다.

use std::sync::Arc;

use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::{
    domain::{
        dto::users::request::LoginRequest,
        entities::users::User,
        models::{
            auth::AuthenticatedUser,
            forms::{FieldErrorKind, FieldErrors},
            token::SessionToken,
        },
    },
    errors::{AppResult, FormError, FormResult},
    repositories::{sessions::SessionStore, users::UserStore},
    services::auth::{PasswordService, TokenService},
};

/// 로그인 세션 서비스
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    passwords: PasswordService,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        passwords: PasswordService,
        tokens: TokenService,
    ) -> Self {
        Self { users, sessions, passwords, tokens }
    }

    /// 로그인 폼을 검증하고 사용자를 인증합니다.
    ///
    /// 사용자명이 없거나 비밀번호가 틀린 경우 어느 쪽인지 드러내지 않고
    /// 폼 전체 에러 하나를 반환합니다.
    pub async fn authenticate(&self, request: &LoginRequest) -> FormResult<User> {
        let errors = request.field_errors();
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }

        let user = match self.users.find_by_username(&request.username).await? {
            Some(user) => user,
            None => {
                log::warn!("🔒 로그인 실패 (사용자 없음): {}", request.username);
                return Err(Self::invalid_login());
            }
        };

        if !self.passwords.verify(&request.password, &user.password_hash)? {
            log::warn!("🔒 로그인 실패 (비밀번호 불일치): {}", request.username);
            return Err(Self::invalid_login());
        }

        log::info!("🔓 로그인 성공: {}", user.username);
        Ok(user)
    }

    fn invalid_login() -> FormError {
        let mut errors = FieldErrors::new();
        errors.add_non_field(FieldErrorKind::InvalidLogin);
        FormError::Invalid(errors)
    }

    /// 사용자에게 새 세션 토큰을 발급합니다.
    pub fn start_session(&self, user: &User) -> AppResult<SessionToken> {
        let session = self.tokens.issue(user)?;
        log::debug!("세션 발급: user={}, session={}", user.username, session.session_id);
        Ok(session)
    }

    /// 세션을 폐기합니다.
    pub async fn logout(&self, user: &AuthenticatedUser) -> AppResult<()> {
        let remaining = (user.expires_at - Utc::now().timestamp()).max(1) as u64;
        self.sessions.revoke(&user.session_id, remaining).await?;

        log::info!("👋 로그아웃: {}", user.username);
        Ok(())
    }

    /// 요청에 실린 세션 토큰을 로그인 사용자로 해석합니다.
    ///
    /// 토큰이 유효하지 않거나, 만료되었거나, 폐기되었거나, 사용자가 더 이상
    /// 존재하지 않으면 `Ok(None)`입니다. 저장소 장애만 `Err`로 전파됩니다.
    pub async fn resolve(&self, token: &str) -> AppResult<Option<AuthenticatedUser>> {
        let claims = match self.tokens.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                log::debug!("세션 토큰 거부: {}", e);
                return Ok(None);
            }
        };

        if self.sessions.is_revoked(&claims.jti).await? {
            log::debug!("폐기된 세션: {}", claims.jti);
            return Ok(None);
        }

        let Ok(user_id) = ObjectId::parse_str(&claims.sub) else {
            return Ok(None);
        };

        let Some(user) = self.users.find_by_id(&user_id).await? else {
            log::debug!("세션 사용자 없음: {}", claims.sub);
            return Ok(None);
        };

        Ok(Some(AuthenticatedUser {
            user_id,
            username: user.username,
            session_id: claims.jti,
            expires_at: claims.exp,
        }))
    }
}
