//! # 사용자 관련 응답 DTO 모듈
//!
//! - [`user_response`] - 사용자/프로필/팔로우 목록 응답 (비밀번호 해시 제외)
//! - [`form_response`] - 폼 화면의 JSON 렌더링 컨텍스트

pub mod user_response;
pub mod form_response;

pub use user_response::{FollowListResponse, ProfileResponse, UserResponse, UserSummary};
pub use form_response::{templates, FormContext, PageContext};
