//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 저장소는 trait으로 정의되고, MongoDB/Redis 구현과 메모리 구현을 가집니다.
//! 서비스는 `Arc<dyn UserStore>` 형태로 저장소를 주입받습니다.
//!
//! | 저장소 | 영속 구현 | 메모리 구현 |
//! |--------|-----------|-------------|
//! | [`UserStore`](users::UserStore) | [`MongoUserStore`](users::MongoUserStore) | [`MemoryUserStore`](users::MemoryUserStore) |
//! | [`FollowStore`](follows::FollowStore) | [`MongoFollowStore`](follows::MongoFollowStore) | [`MemoryFollowStore`](follows::MemoryFollowStore) |
//! | [`SessionStore`](sessions::SessionStore) | [`RedisSessionStore`](sessions::RedisSessionStore) | [`MemorySessionStore`](sessions::MemorySessionStore) |
//!
//! ```rust,ignore
//! use crate::repositories::users::{MemoryUserStore, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
//! let user = users.find_by_username("test").await?;
//! ```

pub mod users;
pub mod follows;
pub mod sessions;

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use std::sync::PoisonError;

use crate::errors::AppError;

/// MongoDB 유니크 인덱스 위반 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반인지 확인합니다.
pub(crate) fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// 메모리 저장소의 잠금 오염을 내부 에러로 변환합니다.
pub(crate) fn lock_poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::InternalError("저장소 잠금이 오염되었습니다".to_string())
}
