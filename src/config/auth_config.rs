//! # Authentication Configuration Module
//!
//! 세션 JWT와 세션 쿠키 설정을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export SESSION_COOKIE_NAME="sessionid"
//! export SESSION_COOKIE_SECURE="true"
//! ```

use std::env;

use super::data_config::Environment;

/// 세션 JWT 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 세션 토큰의 만료 시간 (시간 단위, 기본값 24)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// 세션 쿠키 설정
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 쿠키 이름 (`SESSION_COOKIE_NAME`, 기본값: "sessionid")
    pub fn cookie_name() -> String {
        env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "sessionid".to_string())
    }

    /// HTTPS 전용 쿠키 여부
    ///
    /// `SESSION_COOKIE_SECURE`가 없으면 프로덕션에서만 true.
    pub fn cookie_secure() -> bool {
        match env::var("SESSION_COOKIE_SECURE") {
            Ok(value) => matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"),
            Err(_) => Environment::current().is_production(),
        }
    }
}

/// 계정 화면 경로
pub struct AccountUrls;

impl AccountUrls {
    /// 로그인 페이지
    pub const LOGIN: &'static str = "/accounts/login/";
    /// 로그인/회원가입 후 이동할 홈
    pub const HOME: &'static str = "/tweets/home/";

    /// 프로필 페이지 경로
    pub fn profile(username: &str) -> String {
        format!("/accounts/{}/", urlencoding::encode(username))
    }
}
