//! 메모리 팔로우 저장소
//!
//! 관계는 생성 순서대로 보관되며, 목록은 뒤에서부터 읽어 최근 순으로 반환합니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::FollowStore;
use crate::{
    domain::entities::follows::Follow,
    errors::{AppError, AppResult},
    repositories::lock_poisoned,
};

/// 프로세스 메모리 기반 팔로우 저장소
#[derive(Default)]
pub struct MemoryFollowStore {
    relations: RwLock<Vec<Follow>>,
}

impl MemoryFollowStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn is_pair(relation: &Follow, follower_id: &ObjectId, following_id: &ObjectId) -> bool {
    &relation.follower_id == follower_id && &relation.following_id == following_id
}

#[async_trait]
impl FollowStore for MemoryFollowStore {
    async fn follow(&self, follower_id: &ObjectId, following_id: &ObjectId) -> AppResult<bool> {
        let mut relation = Follow::new(*follower_id, *following_id);
        if relation.is_self_follow() {
            return Err(AppError::ValidationError("자기 자신과의 팔로우 관계는 저장할 수 없습니다".to_string()));
        }

        let mut relations = self.relations.write().map_err(lock_poisoned)?;

        if relations.iter().any(|r| is_pair(r, follower_id, following_id)) {
            return Ok(false);
        }

        relation.id = Some(ObjectId::new());
        relations.push(relation);
        Ok(true)
    }

    async fn unfollow(&self, follower_id: &ObjectId, following_id: &ObjectId) -> AppResult<bool> {
        let mut relations = self.relations.write().map_err(lock_poisoned)?;
        let before = relations.len();
        relations.retain(|r| !is_pair(r, follower_id, following_id));
        Ok(relations.len() < before)
    }

    async fn is_following(&self, follower_id: &ObjectId, following_id: &ObjectId) -> AppResult<bool> {
        let relations = self.relations.read().map_err(lock_poisoned)?;
        Ok(relations.iter().any(|r| is_pair(r, follower_id, following_id)))
    }

    async fn following_of(&self, user_id: &ObjectId) -> AppResult<Vec<ObjectId>> {
        let relations = self.relations.read().map_err(lock_poisoned)?;
        Ok(relations
            .iter()
            .rev()
            .filter(|r| &r.follower_id == user_id)
            .map(|r| r.following_id)
            .collect())
    }

    async fn followers_of(&self, user_id: &ObjectId) -> AppResult<Vec<ObjectId>> {
        let relations = self.relations.read().map_err(lock_poisoned)?;
        Ok(relations
            .iter()
            .rev()
            .filter(|r| &r.following_id == user_id)
            .map(|r| r.follower_id)
            .collect())
    }

    async fn count_following(&self, user_id: &ObjectId) -> AppResult<u64> {
        let relations = self.relations.read().map_err(lock_poisoned)?;
        Ok(relations.iter().filter(|r| &r.follower_id == user_id).count() as u64)
    }

    async fn count_followers(&self, user_id: &ObjectId) -> AppResult<u64> {
        let relations = self.relations.read().map_err(lock_poisoned)?;
        Ok(relations.iter().filter(|r| &r.following_id == user_id).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_follow_is_idempotent() {
        let store = MemoryFollowStore::new();
        let (a, b) = (ObjectId::new(), ObjectId::new());

        assert!(store.follow(&a, &b).await.unwrap());
        assert!(!store.follow(&a, &b).await.unwrap());

        assert_eq!(store.count_following(&a).await.unwrap(), 1);
        assert_eq!(store.count_followers(&b).await.unwrap(), 1);
        assert!(store.is_following(&a, &b).await.unwrap());
        assert!(!store.is_following(&b, &a).await.unwrap());
    }

    #[actix_web::test]
    async fn test_self_relation_is_rejected() {
        let store = MemoryFollowStore::new();
        let me = ObjectId::new();

        assert!(matches!(store.follow(&me, &me).await, Err(AppError::ValidationError(_))));
        assert_eq!(store.count_following(&me).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_unfollow_missing_relation_is_noop() {
        let store = MemoryFollowStore::new();
        let (a, b) = (ObjectId::new(), ObjectId::new());

        assert!(!store.unfollow(&a, &b).await.unwrap());

        store.follow(&a, &b).await.unwrap();
        assert!(store.unfollow(&a, &b).await.unwrap());
        assert!(!store.is_following(&a, &b).await.unwrap());
    }

    #[actix_web::test]
    async fn test_lists_are_newest_first() {
        let store = MemoryFollowStore::new();
        let (me, x, y, z) = (ObjectId::new(), ObjectId::new(), ObjectId::new(), ObjectId::new());

        store.follow(&me, &x).await.unwrap();
        store.follow(&me, &y).await.unwrap();
        store.follow(&z, &me).await.unwrap();
        store.follow(&x, &me).await.unwrap();

        assert_eq!(store.following_of(&me).await.unwrap(), vec![y, x]);
        assert_eq!(store.followers_of(&me).await.unwrap(), vec![x, z]);
    }
}
