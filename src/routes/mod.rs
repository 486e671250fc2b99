//! # 라우트 설정
//!
//! 모든 HTTP 엔드포인트를 등록합니다.
//!
//! ## 라우트 그룹
//!
//! - `/accounts` - 선택적 인증. 로그인이 필요한 핸들러는 `AuthenticatedUser` 추출자로 리디렉션됩니다.
//! - `/tweets` - 필수 인증. 비로그인 요청은 로그인 페이지로 리디렉션됩니다.
//! - `/health` - 인증 없음
//!
//! 고정 경로(`signup/`, `login/`, `logout/`)는 `{username}/` 패턴보다 먼저 등록되어야 합니다.

use actix_web::web;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::home::health_check);

    configure_account_routes(cfg);
    configure_tweet_routes(cfg);
}

fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accounts")
            .wrap(AuthMiddleware::optional())
            // 계정
            .service(handlers::accounts::signup_form)
            .service(handlers::accounts::signup)
            .service(handlers::accounts::login_form)
            .service(handlers::accounts::login)
            .service(handlers::accounts::logout)
            // 프로필
            .service(handlers::profiles::profile)
            .service(handlers::profiles::profile_edit_form)
            .service(handlers::profiles::profile_edit)
            // 팔로우
            .service(handlers::follows::follow)
            .service(handlers::follows::unfollow)
            .service(handlers::follows::following_list)
            .service(handlers::follows::follower_list),
    );
}

fn configure_tweet_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tweets")
            .wrap(AuthMiddleware::required())
            .service(handlers::home::home),
    );
}
