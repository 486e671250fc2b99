//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! 각 설정은 값을 갖지 않는 구조체의 연관 함수로 제공됩니다.
//!
//! - [`data_config`] - 환경, 서버, 저장소, MongoDB, Redis, 비밀번호 해싱, 속도 제한
//! - [`auth_config`] - 세션 JWT, 세션 쿠키, 계정 화면 경로
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, StorageConfig, StorageBackend};
//!
//! let addr = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! if StorageConfig::backend() == StorageBackend::Memory {
//!     log::warn!("in-memory storage");
//! }
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"     # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export STORAGE_BACKEND="mongodb"    # memory, mongodb
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="sns_accounts"
//! export REDIS_URL="redis://127.0.0.1:6379"
//! export BCRYPT_COST="12"             # 4-15
//! export JWT_SECRET="..."
//! export RATE_LIMIT_PER_SECOND="10"
//! export RATE_LIMIT_BURST_SIZE="30"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
