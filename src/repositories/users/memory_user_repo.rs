//! 메모리 사용자 저장소
//!
//! 테스트와 `STORAGE_BACKEND=memory` 실행에 사용합니다.
//! 중복 검사와 삽입은 하나의 쓰기 잠금 안에서 수행됩니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use super::UserStore;
use crate::{
    domain::entities::users::User,
    errors::{AppError, AppResult},
    repositories::lock_poisoned,
};

#[derive(Default)]
struct UserTable {
    by_id: HashMap<ObjectId, User>,
    id_by_username: HashMap<String, ObjectId>,
}

/// 프로세스 메모리 기반 사용자 저장소
#[derive(Default)]
pub struct MemoryUserStore {
    table: RwLock<UserTable>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let table = self.table.read().map_err(lock_poisoned)?;
        Ok(table.by_id.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let table = self.table.read().map_err(lock_poisoned)?;
        Ok(table
            .id_by_username
            .get(username)
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        let table = self.table.read().map_err(lock_poisoned)?;
        Ok(ids.iter().filter_map(|id| table.by_id.get(id).cloned()).collect())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut table = self.table.write().map_err(lock_poisoned)?;

        if table.id_by_username.contains_key(&user.username) {
            return Err(AppError::ConflictError(format!(
                "이미 사용 중인 사용자명입니다: {}",
                user.username
            )));
        }

        let id = user.id.unwrap_or_else(ObjectId::new);
        user.id = Some(id);
        table.id_by_username.insert(user.username.clone(), id);
        table.by_id.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let id = user.id.ok_or_else(|| {
            AppError::InternalError("저장되지 않은 사용자는 갱신할 수 없습니다".to_string())
        })?;

        let mut table = self.table.write().map_err(lock_poisoned)?;

        let previous_username = match table.by_id.get(&id) {
            Some(existing) => existing.username.clone(),
            None => return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string())),
        };

        if let Some(owner) = table.id_by_username.get(&user.username) {
            if *owner != id {
                return Err(AppError::ConflictError(format!(
                    "이미 사용 중인 사용자명입니다: {}",
                    user.username
                )));
            }
        }

        let mut updated = user.clone();
        updated.updated_at = DateTime::now();

        table.id_by_username.remove(&previous_username);
        table.id_by_username.insert(updated.username.clone(), id);
        table.by_id.insert(id, updated.clone());

        Ok(updated)
    }

    async fn count(&self) -> AppResult<u64> {
        let table = self.table.read().map_err(lock_poisoned)?;
        Ok(table.by_id.len() as u64)
    }
}
