//! # MongoDB 팔로우 리포지토리
//!
//! `follows` 컬렉션에 관계를 저장합니다.
//! `follower_following_unique` 복합 유니크 인덱스가 중복 관계를 막으므로
//! `follow`는 중복 키 에러를 "이미 팔로우 중"으로 해석합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, Collection, IndexModel};

use super::FollowStore;
use crate::{
    db::Database,
    domain::entities::follows::Follow,
    errors::{AppError, AppResult},
    repositories::is_duplicate_key,
};

const COLLECTION_NAME: &str = "follows";

/// MongoDB 기반 팔로우 저장소
#[derive(Clone)]
pub struct MongoFollowStore {
    collection: Collection<Follow>,
}

impl MongoFollowStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Follow>(COLLECTION_NAME),
        }
    }

    /// 팔로우 컬렉션 인덱스를 생성합니다.
    ///
    /// - `follower_following_unique`: 관계 유일성
    /// - `following_created_at`: 팔로워 목록 조회용
    pub async fn create_indexes(&self) -> AppResult<()> {
        let pair_index = IndexModel::builder()
            .keys(doc! { "follower_id": 1, "following_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("follower_following_unique".to_string())
                .build())
            .build();

        let followers_index = IndexModel::builder()
            .keys(doc! { "following_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("following_created_at".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([pair_index, followers_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("📇 follows 인덱스 준비 완료");
        Ok(())
    }

    /// 필터에 맞는 관계를 최근 순으로 조회합니다.
    async fn find_newest_first(&self, filter: Document) -> AppResult<Vec<Follow>> {
        self.collection
            .find(filter)
            .sort(doc! { "created_at": -1, "_id": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl FollowStore for MongoFollowStore {
    async fn follow(&self, follower_id: &ObjectId, following_id: &ObjectId) -> AppResult<bool> {
        let relation = Follow::new(*follower_id, *following_id);
        if relation.is_self_follow() {
            return Err(AppError::ValidationError("자기 자신과의 팔로우 관계는 저장할 수 없습니다".to_string()));
        }

        match self.collection.insert_one(&relation).await {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_key(&e) => Ok(false),
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    async fn unfollow(&self, follower_id: &ObjectId, following_id: &ObjectId) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "follower_id": follower_id, "following_id": following_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn is_following(&self, follower_id: &ObjectId, following_id: &ObjectId) -> AppResult<bool> {
        let count = self.collection
            .count_documents(doc! { "follower_id": follower_id, "following_id": following_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn following_of(&self, user_id: &ObjectId) -> AppResult<Vec<ObjectId>> {
        let relations = self.find_newest_first(doc! { "follower_id": user_id }).await?;
        Ok(relations.into_iter().map(|f| f.following_id).collect())
    }

    async fn followers_of(&self, user_id: &ObjectId) -> AppResult<Vec<ObjectId>> {
        let relations = self.find_newest_first(doc! { "following_id": user_id }).await?;
        Ok(relations.into_iter().map(|f| f.follower_id).collect())
    }

    async fn count_following(&self, user_id: &ObjectId) -> AppResult<u64> {
        self.collection
            .count_documents(doc! { "follower_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn count_followers(&self, user_id: &ObjectId) -> AppResult<u64> {
        self.collection
            .count_documents(doc! { "following_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
