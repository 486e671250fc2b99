//! 팔로우 서비스 모듈

pub mod follow_service;

pub use follow_service::FollowService;
