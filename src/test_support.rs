//! 핸들러 테스트 공용 헬퍼

use actix_web::{cookie::Cookie, dev::ServiceResponse, web};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    config::SessionConfig,
    core::AppState,
    domain::{dto::users::request::SignupRequest, entities::users::User},
    errors::{AppError, AppResult},
    repositories::users::{MemoryUserStore, UserStore},
    services::auth::TokenService,
};

/// 인메모리 저장소와 낮은 bcrypt cost를 쓰는 상태
pub fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::in_memory(4, TokenService::new("test-secret", 1)))
}

/// 전체 라우트가 등록된 테스트 서비스 (`init_app!(state).await`)
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state)
                .configure($crate::routes::configure_all_routes),
        )
    };
}
pub(crate) use init_app;

/// 회원가입 서비스를 거쳐 사용자를 만듭니다.
pub async fn create_user(state: &web::Data<AppState>, username: &str, password: &str) -> User {
    let request = SignupRequest {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password1: password.to_string(),
        password2: password.to_string(),
    };

    match state.registration.register(&request).await {
        Ok(user) => user,
        Err(e) => panic!("test user creation failed: {:?}", e),
    }
}

/// 사용자를 만들고 그 사용자의 세션 쿠키를 반환합니다.
pub async fn login_cookie(state: &web::Data<AppState>, username: &str, password: &str) -> Cookie<'static> {
    let user = create_user(state, username, password).await;
    let session = state.auth.start_session(&user).unwrap();
    Cookie::new(SessionConfig::cookie_name(), session.token)
}

/// 응답에 설정된 세션 쿠키 값
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<String> {
    let name = SessionConfig::cookie_name();
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// 조회는 내부 저장소에 위임하고 쓰기는 항상 사용자명 충돌로 거절하는 저장소
///
/// 사전 중복 검사를 통과한 뒤 다른 요청이 같은 사용자명을 먼저 저장한 상황을 재현합니다.
pub struct ConflictingUserStore {
    pub inner: MemoryUserStore,
}

impl ConflictingUserStore {
    pub fn new() -> Self {
        Self { inner: MemoryUserStore::new() }
    }

    fn conflict(username: &str) -> AppError {
        AppError::ConflictError(format!("이미 사용 중인 사용자명입니다: {}", username))
    }
}

#[async_trait]
impl UserStore for ConflictingUserStore {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.inner.find_by_username(username).await
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        self.inner.find_by_ids(ids).await
    }

    async fn create(&self, user: User) -> AppResult<User> {
        Err(Self::conflict(&user.username))
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        Err(Self::conflict(&user.username))
    }

    async fn count(&self) -> AppResult<u64> {
        self.inner.count().await
    }
}
