//! 세션 쿠키와 리디렉션 응답 헬퍼

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    http::header,
    HttpResponse,
};

use crate::config::{AccountUrls, SessionConfig};
use crate::domain::models::token::SessionToken;

/// 302 리디렉션 응답
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// 세션 쿠키를 설정하면서 리디렉션합니다.
pub fn redirect_with_session(location: &str, session: &SessionToken) -> HttpResponse {
    let cookie = Cookie::build(SessionConfig::cookie_name(), session.token.clone())
        .path("/")
        .http_only(true)
        .secure(SessionConfig::cookie_secure())
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(session.expires_in))
        .finish();

    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .cookie(cookie)
        .finish()
}

/// 세션 쿠키를 지우면서 리디렉션합니다.
pub fn redirect_clearing_session(location: &str) -> HttpResponse {
    let mut cookie = Cookie::build(SessionConfig::cookie_name(), "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();

    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .cookie(cookie)
        .finish()
}

/// 로그인 후 이동할 경로
///
/// 같은 사이트 내부 경로만 허용하고, 그 외에는 홈으로 보냅니다.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path,
        _ => AccountUrls::HOME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("/accounts/test/edit/"), "/accounts/test/edit/")]
    #[case(Some("https://evil.example.com/"), "/tweets/home/")]
    #[case(Some("//evil.example.com/"), "/tweets/home/")]
    #[case(Some("/\\evil.example.com"), "/tweets/home/")]
    #[case(None, "/tweets/home/")]
    fn test_safe_next(#[case] next: Option<&str>, #[case] expected: &str) {
        assert_eq!(safe_next(next), expected);
    }

    #[test]
    fn test_session_cookie_is_http_only() {
        let session = SessionToken { token: "jwt".into(), session_id: "jti".into(), expires_in: 3600 };
        let response = redirect_with_session("/tweets/home/", &session);

        let cookie = response.cookies().next().unwrap();
        assert_eq!(cookie.value(), "jwt");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/tweets/home/");
    }
}
