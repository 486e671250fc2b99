//! 세션 폐기 목록 저장소
//!
//! 로그아웃된 세션의 `jti`를 토큰 만료 시점까지 기억합니다.

pub mod session_repo;
pub mod memory_session_repo;

use async_trait::async_trait;

use crate::errors::AppResult;

pub use memory_session_repo::MemorySessionStore;
pub use session_repo::RedisSessionStore;

/// 세션 폐기 저장소 인터페이스
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 세션을 폐기합니다. `ttl_secs`가 지나면 기록은 사라져도 됩니다.
    async fn revoke(&self, session_id: &str, ttl_secs: u64) -> AppResult<()>;

    async fn is_revoked(&self, session_id: &str) -> AppResult<bool>;
}
