//! SNS 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! `STORAGE_BACKEND`에 따라 MongoDB + Redis 또는 인메모리 저장소로 상태를 구성합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::middleware::{self, TrailingSlash};
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use sns_accounts_backend::caching::redis::RedisClient;
use sns_accounts_backend::config::{
    Environment, PasswordConfig, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
use sns_accounts_backend::core::AppState;
use sns_accounts_backend::db::Database;
use sns_accounts_backend::routes::configure_all_routes;
use sns_accounts_backend::services::auth::TokenService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 SNS 계정 서비스 시작중... (environment: {:?})", Environment::current());

    let state = initialize_state().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(state)).await
}

/// 저장소 백엔드를 선택하여 애플리케이션 상태를 구성합니다
///
/// # Errors
///
/// * MongoDB/Redis 연결 실패, 인덱스 생성 실패
async fn initialize_state() -> std::io::Result<AppState> {
    let bcrypt_cost = PasswordConfig::bcrypt_cost();
    let tokens = TokenService::from_config();

    match StorageConfig::backend() {
        StorageBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용 중 - 재시작하면 데이터가 사라집니다");
            Ok(AppState::in_memory(bcrypt_cost, tokens))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new()
                .await
                .map_err(|e| std::io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;
            info!("✅ MongoDB 연결 성공");

            let redis = RedisClient::new()
                .await
                .map_err(|e| std::io::Error::other(format!("Redis 연결 실패: {}", e)))?;
            info!("✅ Redis 연결 성공");

            AppState::persistent(&database, Arc::new(redis), bcrypt_cost, tokens)
                .await
                .map_err(|e| {
                    error!("저장소 초기화 실패: {}", e);
                    std::io::Error::other(e.to_string())
                })
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Signup: http://{}/accounts/signup/", bind_address);

    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            // 계정 경로는 끝 슬래시를 유지하므로 중복 슬래시만 정리
            .wrap(middleware::NormalizePath::new(TrailingSlash::MergeOnly))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 표준 에러로 출력
    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {} (환경 변수만 사용)", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=sns_accounts_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 세션 쿠키를 주고받아야 하므로 자격 증명을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
