//! Follow Entity
//!
//! 사용자 간의 방향성 있는 팔로우 관계입니다.
//! `(follower_id, following_id)` 쌍은 저장소에서 유일하며, 자기 자신은 팔로우할 수 없습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 팔로우 관계 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 팔로우하는 사용자
    pub follower_id: ObjectId,
    /// 팔로우되는 사용자
    pub following_id: ObjectId,
    /// 관계 생성 시간 (목록 정렬 기준)
    pub created_at: DateTime,
}

impl Follow {
    pub fn new(follower_id: ObjectId, following_id: ObjectId) -> Self {
        Self {
            id: None,
            follower_id,
            following_id,
            created_at: DateTime::now(),
        }
    }

    /// 자기 자신을 향한 관계인지 확인
    pub fn is_self_follow(&self) -> bool {
        self.follower_id == self.following_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_follow_detection() {
        let a = ObjectId::new();
        let b = ObjectId::new();

        assert!(Follow::new(a, a).is_self_follow());
        assert!(!Follow::new(a, b).is_self_follow());
    }
}
