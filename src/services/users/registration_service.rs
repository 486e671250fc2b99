//! # 회원가입 서비스
//!
//! 회원가입 폼을 검증하고 사용자를 생성합니다.
//!
//! ## 검증 순서
//!
//! 1. 형식 검증 (필수, 이메일 형식, 사용자명 문자/길이) - [`SignupRequest::field_errors`]
//! 2. 사용자명 중복 (사용자명 형식이 올바를 때만)
//! 3. `password2` 검증
//!    - 두 비밀번호가 모두 입력되었고 다르면 불일치 에러만 보고
//!    - 그 외에 `password2`가 입력되었으면 강도 검증기를 순서대로 실행
//!
//! 모든 에러는 필드별로 누적되며, 에러가 하나라도 있으면 저장소는 변경되지 않습니다.
//! 사전 중복 검사를 통과한 뒤 저장소가 동시 가입으로 중복을 거부하면
//! 같은 사용자명 필드 에러로 변환됩니다.

use std::sync::Arc;

use crate::{
    domain::{
        dto::users::request::SignupRequest,
        entities::users::User,
        models::forms::{FieldErrorKind, FieldErrors},
    },
    errors::{AppError, FormError, FormResult},
    repositories::users::UserStore,
    services::{
        auth::PasswordService,
        users::password_validation::{default_validators, validate_password, PasswordValidator, UserAttributes},
    },
};

/// 검증을 통과한 가입 정보
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// 회원가입 서비스
#[derive(Clone)]
pub struct RegistrationService {
    users: Arc<dyn UserStore>,
    passwords: PasswordService,
    validators: Arc<Vec<Box<dyn PasswordValidator>>>,
}

impl RegistrationService {
    pub fn new(users: Arc<dyn UserStore>, passwords: PasswordService) -> Self {
        Self::with_validators(users, passwords, default_validators())
    }

    /// 비밀번호 검증기 목록을 지정하여 생성합니다.
    pub fn with_validators(
        users: Arc<dyn UserStore>,
        passwords: PasswordService,
        validators: Vec<Box<dyn PasswordValidator>>,
    ) -> Self {
        Self {
            users,
            passwords,
            validators: Arc::new(validators),
        }
    }

    /// 가입 요청을 검증합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(AcceptedUser)` - 모든 규칙 통과
    /// * `Err(FormError::Invalid)` - 필드 에러 목록
    /// * `Err(FormError::App)` - 저장소 조회 실패
    pub async fn validate(&self, request: &SignupRequest) -> FormResult<AcceptedUser> {
        let mut errors = request.field_errors();

        // 형식 검증을 통과한 속성만 유사도 비교에 사용
        let attributes = UserAttributes {
            username: (!errors.has("username")).then_some(request.username.as_str()),
            email: (!errors.has("email")).then_some(request.email.as_str()),
        };

        if !errors.has("username") && self.users.find_by_username(&request.username).await?.is_some() {
            errors.add("username", FieldErrorKind::DuplicateUsername);
        }

        self.check_passwords(request, &attributes, &mut errors);

        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }

        Ok(AcceptedUser {
            username: request.username.clone(),
            email: request.email.clone(),
            password: request.password2.clone(),
        })
    }

    fn check_passwords(&self, request: &SignupRequest, attributes: &UserAttributes<'_>, errors: &mut FieldErrors) {
        let (password1, password2) = (&request.password1, &request.password2);

        if !password1.is_empty() && !password2.is_empty() && password1 != password2 {
            errors.add("password2", FieldErrorKind::PasswordMismatch);
            return;
        }

        if password2.is_empty() {
            return;
        }

        for kind in validate_password(password2, attributes, &self.validators) {
            errors.add("password2", kind);
        }
    }

    /// 가입 요청을 검증하고 사용자를 생성합니다.
    ///
    /// ```rust,ignore
    /// match registration.register(&form).await {
    ///     Ok(user) => start_session(user),
    ///     Err(FormError::Invalid(errors)) => render_form(errors),
    ///     Err(FormError::App(e)) => return Err(e),
    /// }
    /// ```
    pub async fn register(&self, request: &SignupRequest) -> FormResult<User> {
        let accepted = match self.validate(request).await {
            Ok(accepted) => accepted,
            Err(FormError::Invalid(errors)) => {
                log::info!("📝 회원가입 거부: fields={:?}", errors.fields().collect::<Vec<_>>());
                return Err(FormError::Invalid(errors));
            }
            Err(e) => return Err(e),
        };

        let password_hash = self.passwords.hash(&accepted.password)?;
        let user = User::new(accepted.username, accepted.email, password_hash);

        match self.users.create(user).await {
            Ok(created) => {
                log::info!("✅ 회원가입 완료: {}", created.username);
                Ok(created)
            }
            Err(AppError::ConflictError(_)) => {
                log::warn!("⚠️ 동시 가입으로 사용자명 중복: {}", request.username);
                Err(FormError::Invalid(FieldErrors::single(
                    "username",
                    FieldErrorKind::DuplicateUsername,
                )))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::forms::UserAttribute;
    use crate::repositories::users::MemoryUserStore;

    fn service() -> (RegistrationService, Arc<MemoryUserStore>) {
        let store = Arc::new(MemoryUserStore::new());
        let service = RegistrationService::new(store.clone(), PasswordService::new(4));
        (service, store)
    }

    fn form(username: &str, email: &str, password1: &str, password2: &str) -> SignupRequest {
        SignupRequest {
            username: username.into(),
            email: email.into(),
            password1: password1.into(),
            password2: password2.into(),
        }
    }

    fn invalid(result: FormResult<impl std::fmt::Debug>) -> FieldErrors {
        match result {
            Err(FormError::Invalid(errors)) => errors,
            other => panic!("expected field errors, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_register_creates_exactly_one_user() {
        let (service, store) = service();

        let user = service
            .register(&form("test", "test@example.com", "goodpass", "goodpass"))
            .await
            .unwrap();

        assert_eq!(user.username, "test");
        assert_ne!(user.password_hash, "goodpass");
        assert_eq!(store.count().await.unwrap(), 1);
        assert!(store.find_by_username("test").await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_duplicate_username() {
        let (service, store) = service();
        service.register(&form("test", "test@example.com", "goodpass", "goodpass")).await.unwrap();

        let errors = invalid(service.register(&form("test", "other@example.com", "goodpass", "goodpass")).await);

        assert_eq!(errors.get("username"), &[FieldErrorKind::DuplicateUsername]);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_mismatch_reports_only_mismatch() {
        let (service, _) = service();

        let errors = invalid(service.validate(&form("testuser", "test@example.com", "goodpass", "1234")).await);

        assert_eq!(errors.get("password2"), &[FieldErrorKind::PasswordMismatch]);
    }

    #[actix_web::test]
    async fn test_password_strength_order() {
        let (service, _) = service();

        let errors = invalid(service.validate(&form("test", "test@example.com", "test", "test")).await);

        assert_eq!(
            errors.get("password2"),
            &[
                FieldErrorKind::PasswordTooSimilar { attribute: UserAttribute::Username },
                FieldErrorKind::PasswordTooShort { min: 8 },
            ]
        );
    }

    #[actix_web::test]
    async fn test_errors_on_different_fields_coexist() {
        let (service, store) = service();

        let errors = invalid(service.register(&form("", "test.example.com", "pass", "pass")).await);

        assert_eq!(errors.get("username"), &[FieldErrorKind::Required]);
        assert_eq!(errors.get("email"), &[FieldErrorKind::InvalidEmail]);
        assert_eq!(errors.get("password2"), &[FieldErrorKind::PasswordTooShort { min: 8 }]);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_empty_passwords_only_required() {
        let (service, _) = service();

        let errors = invalid(service.validate(&form("test", "test@example.com", "", "")).await);

        assert_eq!(errors.get("password1"), &[FieldErrorKind::Required]);
        assert_eq!(errors.get("password2"), &[FieldErrorKind::Required]);
    }

    #[actix_web::test]
    async fn test_accepted_user_carries_trimmed_values() {
        let (service, _) = service();
        let request: SignupRequest = serde_json::from_str(
            r#"{"username": " test ", "email": " test@example.com ", "password1": "goodpass", "password2": "goodpass"}"#,
        )
        .unwrap();

        let accepted = service.validate(&request).await.unwrap();

        assert_eq!(accepted.username, "test");
        assert_eq!(accepted.email, "test@example.com");
    }

    #[actix_web::test]
    async fn test_store_conflict_becomes_username_error() {
        use crate::test_support::ConflictingUserStore;

        let store = Arc::new(ConflictingUserStore::new());
        let service = RegistrationService::new(store.clone(), PasswordService::new(4));

        let errors = invalid(service.register(&form("test", "test@example.com", "goodpass", "goodpass")).await);

        assert_eq!(errors.get("username"), &[FieldErrorKind::DuplicateUsername]);
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
