//! 팔로우 관계 저장소
//!
//! `(follower_id, following_id)` 쌍은 최대 하나만 저장됩니다.
//! 목록 조회는 최근에 맺어진 관계가 먼저 옵니다.

pub mod follow_repo;
pub mod memory_follow_repo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::AppResult;

pub use follow_repo::MongoFollowStore;
pub use memory_follow_repo::MemoryFollowStore;

/// 팔로우 저장소 인터페이스
#[async_trait]
pub trait FollowStore: Send + Sync {
    /// 관계를 추가합니다. 새로 추가되었으면 true, 이미 있었으면 false.
    async fn follow(&self, follower_id: &ObjectId, following_id: &ObjectId) -> AppResult<bool>;

    /// 관계를 제거합니다. 제거되었으면 true, 원래 없었으면 false.
    async fn unfollow(&self, follower_id: &ObjectId, following_id: &ObjectId) -> AppResult<bool>;

    async fn is_following(&self, follower_id: &ObjectId, following_id: &ObjectId) -> AppResult<bool>;

    /// `user_id`가 팔로우하는 사용자 ID 목록 (최근 순)
    async fn following_of(&self, user_id: &ObjectId) -> AppResult<Vec<ObjectId>>;

    /// `user_id`를 팔로우하는 사용자 ID 목록 (최근 순)
    async fn followers_of(&self, user_id: &ObjectId) -> AppResult<Vec<ObjectId>>;

    async fn count_following(&self, user_id: &ObjectId) -> AppResult<u64>;

    async fn count_followers(&self, user_id: &ObjectId) -> AppResult<u64>;
}
