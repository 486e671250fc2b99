//! # Core Module
//!
//! 애플리케이션 조립을 담당합니다. [`state::AppState`]가 저장소와 서비스를 묶어
//! actix-web `app_data`로 공유됩니다.

pub mod state;

pub use state::AppState;
