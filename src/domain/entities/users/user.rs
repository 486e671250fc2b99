//! User Entity Implementation
//!
//! 계정 기능의 핵심 사용자 엔티티입니다.
//! 회원가입 시 생성되고 프로필 수정으로 갱신됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자명 최대 길이 (문자 수)
pub const USERNAME_MAX_LENGTH: usize = 150;

/// 사용자 엔티티
///
/// `username`은 저장소 전체에서 유일합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique)
    pub username: String,
    /// 이메일
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 자기소개
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// `id`는 저장소가 삽입 시점에 할당합니다.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            password_hash,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 프로필 정보 갱신
    pub fn update_profile(&mut self, username: String, email: String, bio: Option<String>) {
        self.username = username;
        self.email = email;
        self.bio = bio;
        self.updated_at = DateTime::now();
    }

    /// 같은 사용자인지 확인 (저장되지 않은 사용자는 항상 false)
    pub fn is_same_user(&self, other_id: &ObjectId) -> bool {
        self.id.as_ref() == Some(other_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id_and_no_bio() {
        let user = User::new("test".into(), "test@example.com".into(), "hash".into());

        assert!(user.id.is_none());
        assert!(user.bio.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_update_profile() {
        let mut user = User::new("test".into(), "test@example.com".into(), "hash".into());
        user.update_profile("renamed".into(), "new@example.com".into(), Some("hello".into()));

        assert_eq!(user.username, "renamed");
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.bio.as_deref(), Some("hello"));
    }

    #[test]
    fn test_is_same_user() {
        let id = ObjectId::new();
        let mut user = User::new("test".into(), "test@example.com".into(), "hash".into());
        assert!(!user.is_same_user(&id));

        user.id = Some(id);
        assert!(user.is_same_user(&id));
        assert!(!user.is_same_user(&ObjectId::new()));
    }
}
