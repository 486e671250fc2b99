//! # 팔로우 서비스
//!
//! 팔로우/언팔로우와 팔로잉/팔로워 목록 조회를 담당합니다.
//!
//! - 대상 사용자가 없으면 `NotFound`
//! - 자기 자신이 대상이면 `ValidationError` (메시지는 카탈로그에서 가져옴)
//! - 팔로우는 멱등이며, 팔로우하지 않은 사용자의 언팔로우는 아무 일도 하지 않음

use std::sync::Arc;

use crate::{
    domain::{
        dto::users::response::{FollowListResponse, UserSummary},
        entities::users::User,
        models::{auth::AuthenticatedUser, forms::MessageCatalog},
    },
    errors::{AppError, AppResult},
    repositories::{follows::FollowStore, users::UserStore},
};

/// 팔로우 서비스
#[derive(Clone)]
pub struct FollowService {
    users: Arc<dyn UserStore>,
    follows: Arc<dyn FollowStore>,
    messages: Arc<dyn MessageCatalog>,
}

impl FollowService {
    pub fn new(users: Arc<dyn UserStore>, follows: Arc<dyn FollowStore>, messages: Arc<dyn MessageCatalog>) -> Self {
        Self { users, follows, messages }
    }

    async fn target(&self, username: &str) -> AppResult<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", username)))
    }

    fn id_of(user: &User) -> AppResult<mongodb::bson::oid::ObjectId> {
        user.id.ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))
    }

    /// `actor`가 `username`을 팔로우합니다.
    pub async fn follow(&self, actor: &AuthenticatedUser, username: &str) -> AppResult<()> {
        let target = self.target(username).await?;
        let target_id = Self::id_of(&target)?;

        if actor.is(&target_id) {
            return Err(AppError::ValidationError(self.messages.self_follow()));
        }

        if self.follows.follow(&actor.user_id, &target_id).await? {
            log::info!("➕ 팔로우: {} → {}", actor.username, target.username);
        }
        Ok(())
    }

    /// `actor`가 `username`의 팔로우를 해제합니다.
    pub async fn unfollow(&self, actor: &AuthenticatedUser, username: &str) -> AppResult<()> {
        let target = self.target(username).await?;
        let target_id = Self::id_of(&target)?;

        if actor.is(&target_id) {
            return Err(AppError::ValidationError(self.messages.self_unfollow()));
        }

        if self.follows.unfollow(&actor.user_id, &target_id).await? {
            log::info!("➖ 언팔로우: {} → {}", actor.username, target.username);
        }
        Ok(())
    }

    /// `username`이 팔로우하는 사용자 목록 (최근 순)
    pub async fn following_list(&self, username: &str) -> AppResult<FollowListResponse> {
        let owner = self.target(username).await?;
        let ids = self.follows.following_of(&Self::id_of(&owner)?).await?;
        self.list_response(owner, &ids).await
    }

    /// `username`을 팔로우하는 사용자 목록 (최근 순)
    pub async fn follower_list(&self, username: &str) -> AppResult<FollowListResponse> {
        let owner = self.target(username).await?;
        let ids = self.follows.followers_of(&Self::id_of(&owner)?).await?;
        self.list_response(owner, &ids).await
    }

    async fn list_response(&self, owner: User, ids: &[mongodb::bson::oid::ObjectId]) -> AppResult<FollowListResponse> {
        let users = self.users.find_by_ids(ids).await?;

        Ok(FollowListResponse {
            username: owner.username,
            users: users.iter().map(UserSummary::from).collect(),
        })
    }
}
