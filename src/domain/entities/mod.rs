//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 도메인 엔티티들입니다.
//!
//! ```text
//! entities/
//! ├── users/    ← 사용자 (username 유일)
//! └── follows/  ← 팔로우 관계 (follower → following)
//! ```
//!
//! 모든 엔티티는 `_id`를 `Option<ObjectId>`로 가지며, 저장소가 삽입 시점에 채웁니다.

pub mod users;
pub mod follows;
