//! Redis 세션 폐기 목록

use std::sync::Arc;

use async_trait::async_trait;

use super::SessionStore;
use crate::{
    caching::redis::RedisClient,
    errors::{AppError, AppResult},
};

/// Redis 기반 세션 폐기 저장소
///
/// 키: `revoked_session:{jti}`, TTL: 토큰의 남은 유효 시간
#[derive(Clone)]
pub struct RedisSessionStore {
    redis: Arc<RedisClient>,
}

impl RedisSessionStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    fn key(session_id: &str) -> String {
        format!("revoked_session:{}", session_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn revoke(&self, session_id: &str, ttl_secs: u64) -> AppResult<()> {
        self.redis
            .set_with_expiry(&Self::key(session_id), &true, ttl_secs.max(1))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    async fn is_revoked(&self, session_id: &str) -> AppResult<bool> {
        self.redis
            .exists(&Self::key(session_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
