use serde::Serialize;
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::User;

fn format_time(time: &DateTime) -> String {
    time.try_to_rfc3339_string().unwrap_or_default()
}

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            username: user.username.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            created_at: format_time(&user.created_at),
            updated_at: format_time(&user.updated_at),
        }
    }
}

/// 목록 표시용 사용자 요약
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub username: String,
    pub bio: Option<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            bio: user.bio.clone(),
        }
    }
}

/// 프로필 화면 응답
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub following_count: u64,
    pub follower_count: u64,
    /// 조회자가 이 사용자를 팔로우 중인지 (비로그인 시 false)
    pub is_following: bool,
    /// 조회자 본인의 프로필인지
    pub is_own_profile: bool,
}

/// 팔로잉/팔로워 목록 응답
#[derive(Debug, Clone, Serialize)]
pub struct FollowListResponse {
    /// 목록의 주인
    pub username: String,
    /// 최근 관계가 먼저 오는 사용자 목록
    pub users: Vec<UserSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_hides_password_hash() {
        let mut user = User::new("test".into(), "test@example.com".into(), "$2b$04$hash".into());
        user.id = Some(ObjectId::new());

        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(json["username"], "test");
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["id"].as_str().unwrap().len(), 24);
    }
}
