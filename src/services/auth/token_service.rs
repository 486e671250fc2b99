//! 세션 토큰 서비스 구현
//!
//! 로그인 세션을 HS256 JWT로 발급하고 검증합니다.
//! 각 토큰은 고유한 `jti`를 가지며, 로그아웃 시 이 값이 폐기 목록에 오릅니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    config::JwtConfig,
    domain::{
        entities::users::User,
        models::token::{SessionClaims, SessionToken},
    },
    errors::{AppError, AppResult, ErrorContext},
};

/// JWT 세션 토큰 서비스
///
/// HMAC-SHA256 서명을 사용합니다.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// [`JwtConfig`]로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 세션 유효 기간 (초)
    pub fn expires_in(&self) -> i64 {
        self.expiration_hours * 3600
    }

    /// 사용자를 위한 세션 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 사용자 ID 없음 또는 서명 실패
    ///
    /// ```rust,ignore
    /// let session = token_service.issue(&user)?;
    /// cookie.set_value(session.token);
    /// ```
    pub fn issue(&self, user: &User) -> AppResult<SessionToken> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);
        let session_id = Uuid::new_v4().to_string();

        let claims = SessionClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            username: user.username.clone(),
            jti: session_id.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());
        let token = encode(&Header::default(), &claims, &encoding_key).context("JWT 토큰 생성 실패")?;

        Ok(SessionToken {
            token,
            session_id,
            expires_in: self.expires_in(),
        })
    }

    /// 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 서명 불일치, 형식 오류
    pub fn verify(&self, token: &str) -> AppResult<SessionClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        // 폐기 목록 TTL이 `exp`까지이므로 만료 유예를 두지 않음
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<SessionClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// "Bearer {token}" 형식에서 토큰 부분 추출
    pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
        auth_header
            .strip_prefix("Bearer ")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}
