//! 메모리 세션 폐기 목록

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use super::SessionStore;
use crate::{errors::AppResult, repositories::lock_poisoned};

/// 프로세스 메모리 기반 세션 폐기 저장소
///
/// 세션 ID → 기록 만료 시각(Unix timestamp)
#[derive(Default)]
pub struct MemorySessionStore {
    revoked: RwLock<HashMap<String, i64>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn revoke(&self, session_id: &str, ttl_secs: u64) -> AppResult<()> {
        let now = Utc::now().timestamp();
        let mut revoked = self.revoked.write().map_err(lock_poisoned)?;

        // 만료된 기록 정리
        revoked.retain(|_, expires_at| *expires_at > now);
        revoked.insert(session_id.to_string(), now + ttl_secs.max(1) as i64);
        Ok(())
    }

    async fn is_revoked(&self, session_id: &str) -> AppResult<bool> {
        let now = Utc::now().timestamp();
        let revoked = self.revoked.read().map_err(lock_poisoned)?;
        Ok(revoked.get(session_id).is_some_and(|expires_at| *expires_at > now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_revoke_marks_session() {
        let store = MemorySessionStore::new();

        assert!(!store.is_revoked("jti-1").await.unwrap());
        store.revoke("jti-1", 60).await.unwrap();
        assert!(store.is_revoked("jti-1").await.unwrap());
        assert!(!store.is_revoked("jti-2").await.unwrap());
    }
}
