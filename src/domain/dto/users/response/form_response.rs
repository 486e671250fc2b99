//! 폼 렌더링 컨텍스트
//!
//! 템플릿 엔진 대신 "어떤 화면을 어떤 데이터와 에러로 그릴지"를 JSON으로 반환합니다.
//!
//! ```json
//! {
//!   "template": "accounts/signup.html",
//!   "form": {
//!     "data": { "username": "test", "email": "test@example.com" },
//!     "errors": { "username": ["同じユーザー名が既に登録済みです。"] }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::models::forms::{FieldErrors, MessageCatalog};

/// 화면 템플릿 이름
pub mod templates {
    pub const SIGNUP: &str = "accounts/signup.html";
    pub const LOGIN: &str = "accounts/login.html";
    pub const PROFILE: &str = "accounts/profile.html";
    pub const PROFILE_EDIT: &str = "accounts/profile_edit.html";
    pub const FOLLOWING_LIST: &str = "accounts/following_list.html";
    pub const FOLLOWER_LIST: &str = "accounts/follower_list.html";
    pub const HOME: &str = "tweets/home.html";
}

/// 폼 데이터와 렌더링된 에러 메시지
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub data: serde_json::Value,
    pub errors: BTreeMap<String, Vec<String>>,
}

/// 폼 화면 응답
#[derive(Debug, Clone, Serialize)]
pub struct FormContext {
    pub template: &'static str,
    pub form: FormView,
}

impl FormContext {
    /// 빈 폼
    pub fn blank(template: &'static str) -> Self {
        Self {
            template,
            form: FormView {
                data: serde_json::json!({}),
                errors: BTreeMap::new(),
            },
        }
    }

    /// 초기값이 채워진 폼 (프로필 수정 화면 등)
    pub fn prefilled(template: &'static str, data: serde_json::Value) -> Self {
        Self {
            template,
            form: FormView { data, errors: BTreeMap::new() },
        }
    }

    /// 입력값과 에러를 담은 폼
    pub fn with_errors(
        template: &'static str,
        data: serde_json::Value,
        errors: &FieldErrors,
        catalog: &dyn MessageCatalog,
    ) -> Self {
        Self {
            template,
            form: FormView { data, errors: errors.render(catalog) },
        }
    }
}

/// 폼이 아닌 일반 화면 응답
#[derive(Debug, Clone, Serialize)]
pub struct PageContext<T: Serialize> {
    pub template: &'static str,
    #[serde(flatten)]
    pub context: T,
}

impl<T: Serialize> PageContext<T> {
    pub fn new(template: &'static str, context: T) -> Self {
        Self { template, context }
    }
}
