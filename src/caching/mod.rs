//! 캐싱 계층 모듈
//!
//! Redis 연결과 JSON 기반 값 저장을 제공합니다.
//! 세션 폐기 목록([`RedisSessionStore`](crate::repositories::sessions::RedisSessionStore))이 사용합니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
