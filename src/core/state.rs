//! # 애플리케이션 상태
//!
//! 저장소와 서비스를 한곳에 모아 `web::Data<AppState>`로 핸들러와 미들웨어에 공유합니다.
//! 저장소는 trait 객체로 보관되므로 MongoDB/Redis 구현과 인메모리 구현을 같은 방식으로 주입할 수 있습니다.
//!
//! ## 구성
//!
//! ```text
//! AppState
//! ├─ users:    Arc<dyn UserStore>      (MongoDB | Memory)
//! ├─ follows:  Arc<dyn FollowStore>    (MongoDB | Memory)
//! ├─ sessions: Arc<dyn SessionStore>   (Redis   | Memory)
//! ├─ messages: Arc<dyn MessageCatalog> (일본어 기본)
//! └─ registration / auth / user / follow 서비스
//! ```
//!
//! ```rust,ignore
//! let state = web::Data::new(AppState::in_memory(4, TokenService::new("secret", 24)));
//! App::new().app_data(state.clone()).configure(configure_all_routes)
//! ```

use std::sync::Arc;

use crate::{
    caching::redis::RedisClient,
    db::Database,
    domain::models::forms::{JapaneseMessages, MessageCatalog},
    errors::AppResult,
    repositories::{
        follows::{FollowStore, MemoryFollowStore, MongoFollowStore},
        sessions::{MemorySessionStore, RedisSessionStore, SessionStore},
        users::{MemoryUserStore, MongoUserStore, UserStore},
    },
    services::{
        auth::{AuthService, PasswordService, TokenService},
        follows::FollowService,
        users::{RegistrationService, UserService},
    },
};

/// 요청 간에 공유되는 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub follows: Arc<dyn FollowStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub messages: Arc<dyn MessageCatalog>,
    pub registration: RegistrationService,
    pub auth: AuthService,
    pub user_service: UserService,
    pub follow_service: FollowService,
}

impl AppState {
    /// 저장소 구현을 받아 서비스들을 조립합니다.
    pub fn new(
        users: Arc<dyn UserStore>,
        follows: Arc<dyn FollowStore>,
        sessions: Arc<dyn SessionStore>,
        passwords: PasswordService,
        tokens: TokenService,
    ) -> Self {
        Self::with_messages(users, follows, sessions, passwords, tokens, Arc::new(JapaneseMessages))
    }

    /// 메시지 카탈로그를 지정하여 조립합니다.
    pub fn with_messages(
        users: Arc<dyn UserStore>,
        follows: Arc<dyn FollowStore>,
        sessions: Arc<dyn SessionStore>,
        passwords: PasswordService,
        tokens: TokenService,
        messages: Arc<dyn MessageCatalog>,
    ) -> Self {
        Self {
            registration: RegistrationService::new(users.clone(), passwords.clone()),
            auth: AuthService::new(users.clone(), sessions.clone(), passwords, tokens),
            user_service: UserService::new(users.clone(), follows.clone()),
            follow_service: FollowService::new(users.clone(), follows.clone(), messages.clone()),
            users,
            follows,
            sessions,
            messages,
        }
    }

    /// 인메모리 저장소로 구성된 상태 (개발/테스트용)
    pub fn in_memory(bcrypt_cost: u32, tokens: TokenService) -> Self {
        Self::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryFollowStore::new()),
            Arc::new(MemorySessionStore::new()),
            PasswordService::new(bcrypt_cost),
            tokens,
        )
    }

    /// MongoDB + Redis로 구성된 상태
    ///
    /// 컬렉션 인덱스를 먼저 생성하므로, 사용자명 유일성이 저장소 수준에서 보장된 뒤에 서버가 뜹니다.
    pub async fn persistent(
        database: &Database,
        redis: Arc<RedisClient>,
        bcrypt_cost: u32,
        tokens: TokenService,
    ) -> AppResult<Self> {
        let users = MongoUserStore::new(database);
        users.create_indexes().await?;

        let follows = MongoFollowStore::new(database);
        follows.create_indexes().await?;

        log::info!("📑 MongoDB 인덱스 준비 완료: {}", database.database_name());

        Ok(Self::new(
            Arc::new(users),
            Arc::new(follows),
            Arc::new(RedisSessionStore::new(redis)),
            PasswordService::new(bcrypt_cost),
            tokens,
        ))
    }
}
