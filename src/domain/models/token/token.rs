//! 세션 JWT 클레임
//!
//! 로그인 세션은 HttpOnly 쿠키에 담긴 HS256 JWT로 표현됩니다.
//! 로그아웃 시 `jti`가 폐기 목록에 등록되어 이후 요청에서 거부됩니다.
use serde::{Deserialize, Serialize};

/// 세션 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 사용자 ID (ObjectId hex)
/// - `username`: 발급 시점의 사용자명 (표시용)
/// - `jti`: 세션 식별자 (UUID v4)
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub username: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// 발급된 세션 토큰
#[derive(Debug, Clone)]
pub struct SessionToken {
    /// 인코딩된 JWT
    pub token: String,
    /// 세션 식별자
    pub session_id: String,
    /// 유효 기간 (초)
    pub expires_in: i64,
}
