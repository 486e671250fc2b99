//! # 사용자 프로필 서비스 구현
//!
//! 프로필 조회와 프로필 수정을 담당합니다.
//!
//! ## 권한 규칙
//!
//! - 조회: 누구나 가능, 존재하지 않는 사용자명은 `NotFound`
//! - 수정: 로그인한 본인만 가능, 다른 사용자는 `AuthorizationError`
//!
//! 수정 폼의 사용자명/이메일은 회원가입과 같은 형식 규칙을 따르며,
//! 중복 검사에서 본인의 현재 사용자명은 제외됩니다.

use std::sync::Arc;

use crate::{
    domain::{
        dto::users::{
            request::ProfileEditRequest,
            response::{ProfileResponse, UserResponse},
        },
        entities::users::User,
        models::{
            auth::AuthenticatedUser,
            forms::{FieldErrorKind, FieldErrors},
        },
    },
    errors::{AppError, AppResult, FormError, FormResult},
    repositories::{follows::FollowStore, users::UserStore},
};

/// 사용자 프로필 서비스
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    follows: Arc<dyn FollowStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, follows: Arc<dyn FollowStore>) -> Self {
        Self { users, follows }
    }

    /// 사용자명으로 사용자를 찾습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 존재하지 않는 사용자명
    pub async fn get_by_username(&self, username: &str) -> AppResult<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", username)))
    }

    /// 프로필 화면 데이터를 조회합니다.
    ///
    /// `viewer`가 있으면 팔로우 여부와 본인 여부를 함께 계산합니다.
    pub async fn get_profile(&self, username: &str, viewer: Option<&AuthenticatedUser>) -> AppResult<ProfileResponse> {
        let user = self.get_by_username(username).await?;
        let user_id = user.id.ok_or_else(|| {
            AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string())
        })?;

        let following_count = self.follows.count_following(&user_id).await?;
        let follower_count = self.follows.count_followers(&user_id).await?;

        let (is_following, is_own_profile) = match viewer {
            Some(viewer) if viewer.is(&user_id) => (false, true),
            Some(viewer) => (self.follows.is_following(&viewer.user_id, &user_id).await?, false),
            None => (false, false),
        };

        Ok(ProfileResponse {
            user: UserResponse::from(&user),
            following_count,
            follower_count,
            is_following,
            is_own_profile,
        })
    }

    /// 수정 권한을 확인하고 대상 사용자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 존재하지 않는 사용자명
    /// * `AppError::AuthorizationError` - 로그인 사용자가 대상과 다름
    pub async fn authorize_edit(&self, username: &str, actor: &AuthenticatedUser) -> AppResult<User> {
        let user = self.get_by_username(username).await?;

        if !user.is_same_user(&actor.user_id) {
            log::warn!("🚫 다른 사용자의 프로필 수정 시도: actor={}, target={}", actor.username, username);
            return Err(AppError::AuthorizationError(
                "다른 사용자의 프로필은 수정할 수 없습니다".to_string(),
            ));
        }

        Ok(user)
    }

    /// 프로필을 수정합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 갱신된 사용자
    /// * `Err(FormError::Invalid)` - 필드 에러 (저장소 변경 없음)
    /// * `Err(FormError::App)` - 404/403 또는 저장소 에러
    pub async fn edit_profile(
        &self,
        username: &str,
        actor: &AuthenticatedUser,
        request: &ProfileEditRequest,
    ) -> FormResult<User> {
        let mut user = self.authorize_edit(username, actor).await?;
        let mut errors = request.field_errors();

        if !errors.has("username") && request.username != user.username {
            if self.users.find_by_username(&request.username).await?.is_some() {
                errors.add("username", FieldErrorKind::DuplicateUsername);
            }
        }

        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }

        user.update_profile(request.username.clone(), request.email.clone(), request.bio.clone());

        match self.users.update(&user).await {
            Ok(updated) => {
                log::info!("✏️ 프로필 수정 완료: {} → {}", username, updated.username);
                Ok(updated)
            }
            Err(AppError::ConflictError(_)) => Err(FormError::Invalid(FieldErrors::single(
                "username",
                FieldErrorKind::DuplicateUsername,
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{follows::MemoryFollowStore, users::MemoryUserStore};

    struct Fixture {
        service: UserService,
        users: Arc<MemoryUserStore>,
        follows: Arc<MemoryFollowStore>,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(MemoryUserStore::new());
        let follows = Arc::new(MemoryFollowStore::new());
        let service = UserService::new(users.clone(), follows.clone());
        Fixture { service, users, follows }
    }

    async fn create(users: &MemoryUserStore, username: &str) -> User {
        users
            .create(User::new(username.into(), format!("{}@example.com", username), "hash".into()))
            .await
            .unwrap()
    }

    fn session_of(user: &User) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: user.id.unwrap(),
            username: user.username.clone(),
            session_id: "session".into(),
            expires_at: 0,
        }
    }

    fn edit_form(username: &str, email: &str) -> ProfileEditRequest {
        ProfileEditRequest { username: username.into(), email: email.into(), bio: Some("hello".into()) }
    }

    #[actix_web::test]
    async fn test_profile_of_unknown_user_is_not_found() {
        let f = fixture();
        let result = f.service.get_profile("ghost", None).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_profile_counts_and_follow_state() {
        let f = fixture();
        let alice = create(&f.users, "alice").await;
        let bob = create(&f.users, "bob").await;
        f.follows.follow(&bob.id.unwrap(), &alice.id.unwrap()).await.unwrap();

        let profile = f.service.get_profile("alice", Some(&session_of(&bob))).await.unwrap();

        assert_eq!(profile.follower_count, 1);
        assert_eq!(profile.following_count, 0);
        assert!(profile.is_following);
        assert!(!profile.is_own_profile);

        let own = f.service.get_profile("alice", Some(&session_of(&alice))).await.unwrap();
        assert!(own.is_own_profile);
    }

    #[actix_web::test]
    async fn test_edit_by_other_user_is_forbidden() {
        let f = fixture();
        create(&f.users, "alice").await;
        let bob = create(&f.users, "bob").await;

        let result = f.service.edit_profile("alice", &session_of(&bob), &edit_form("alice", "x@example.com")).await;

        assert!(matches!(result, Err(FormError::App(AppError::AuthorizationError(_)))));
    }

    #[actix_web::test]
    async fn test_edit_unknown_user_is_not_found() {
        let f = fixture();
        let bob = create(&f.users, "bob").await;

        let result = f.service.edit_profile("ghost", &session_of(&bob), &edit_form("ghost", "x@example.com")).await;

        assert!(matches!(result, Err(FormError::App(AppError::NotFound(_)))));
    }

    #[actix_web::test]
    async fn test_edit_renames_and_keeps_own_username_allowed() {
        let f = fixture();
        let alice = create(&f.users, "alice").await;

        let same = f.service.edit_profile("alice", &session_of(&alice), &edit_form("alice", "new@example.com")).await.unwrap();
        assert_eq!(same.email, "new@example.com");
        assert_eq!(same.bio.as_deref(), Some("hello"));

        let renamed = f.service.edit_profile("alice", &session_of(&alice), &edit_form("alice2", "new@example.com")).await.unwrap();
        assert_eq!(renamed.username, "alice2");
        assert!(f.users.find_by_username("alice").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_edit_to_taken_username_is_field_error() {
        let f = fixture();
        let alice = create(&f.users, "alice").await;
        create(&f.users, "bob").await;

        let result = f.service.edit_profile("alice", &session_of(&alice), &edit_form("bob", "a@example.com")).await;

        match result {
            Err(FormError::Invalid(errors)) => {
                assert_eq!(errors.get("username"), &[FieldErrorKind::DuplicateUsername]);
            }
            other => panic!("expected field errors, got {:?}", other),
        }
        assert_eq!(f.users.find_by_username("alice").await.unwrap().unwrap().email, "alice@example.com");
    }

    #[actix_web::test]
    async fn test_store_conflict_on_rename_becomes_username_error() {
        use crate::test_support::ConflictingUserStore;

        let users = Arc::new(ConflictingUserStore::new());
        let alice = create(&users.inner, "alice").await;
        let service = UserService::new(users.clone(), Arc::new(MemoryFollowStore::new()));

        let result = service.edit_profile("alice", &session_of(&alice), &edit_form("bob", "a@example.com")).await;

        match result {
            Err(FormError::Invalid(errors)) => {
                assert_eq!(errors.get("username"), &[FieldErrorKind::DuplicateUsername]);
            }
            other => panic!("expected field errors, got {:?}", other),
        }
        assert_eq!(users.find_by_username("alice").await.unwrap().unwrap().email, "alice@example.com");
    }
}
