//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 사용자를 저장합니다.
//! 사용자명 유일성은 `username_unique` 인덱스가 최종적으로 보장합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, DateTime}, options::IndexOptions, Collection, IndexModel};

use super::UserStore;
use crate::{
    db::Database,
    domain::entities::users::User,
    errors::{AppError, AppResult},
    repositories::is_duplicate_key,
};

const COLLECTION_NAME: &str = "users";

/// MongoDB 기반 사용자 저장소
#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(COLLECTION_NAME),
        }
    }

    /// 사용자 컬렉션 인덱스를 생성합니다.
    ///
    /// - `username_unique`: 사용자명 유니크 인덱스
    /// - `created_at_desc`: 가입일 정렬용
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("📇 users 인덱스 준비 완료");
        Ok(())
    }

    fn duplicate_username(username: &str) -> AppError {
        AppError::ConflictError(format!("이미 사용 중인 사용자명입니다: {}", username))
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<User> = self.collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // $in 결과는 순서가 보장되지 않음
        Ok(ids
            .iter()
            .filter_map(|id| found.iter().find(|user| user.id.as_ref() == Some(id)).cloned())
            .collect())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    Self::duplicate_username(&user.username)
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 사용자 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let id = user.id.ok_or_else(|| {
            AppError::InternalError("저장되지 않은 사용자는 갱신할 수 없습니다".to_string())
        })?;

        let bio = match &user.bio {
            Some(bio) => mongodb::bson::Bson::String(bio.clone()),
            None => mongodb::bson::Bson::Null,
        };

        let result = self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "username": &user.username,
                    "email": &user.email,
                    "bio": bio,
                    "updated_at": DateTime::now(),
                } },
            )
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    Self::duplicate_username(&user.username)
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
