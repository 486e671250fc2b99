//! 사용자 저장소
//!
//! [`UserStore`]는 사용자명 유일성을 보장합니다. 같은 사용자명으로 동시에
//! `create`가 호출되어도 정확히 하나만 성공하고 나머지는 `AppError::ConflictError`를 받습니다.

pub mod user_repo;
pub mod memory_user_repo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::User;
use crate::errors::AppResult;

pub use memory_user_repo::MemoryUserStore;
pub use user_repo::MongoUserStore;

/// 사용자 저장소 인터페이스
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 사용자명으로 조회 (대소문자 구분)
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 여러 ID를 조회합니다. 결과는 입력 순서를 따르며 없는 ID는 건너뜁니다.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 사용자를 반환합니다.
    ///
    /// 사용자명이 이미 존재하면 `AppError::ConflictError`.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 기존 사용자를 갱신합니다.
    ///
    /// 다른 사용자가 이미 쓰는 사용자명으로 바꾸면 `AppError::ConflictError`,
    /// 사용자가 없으면 `AppError::NotFound`.
    async fn update(&self, user: &User) -> AppResult<User>;

    /// 전체 사용자 수
    async fn count(&self) -> AppResult<u64>;
}
