//! # HTTP Handlers
//!
//! 요청을 받아 서비스 계층을 호출하고, 결과를 JSON 화면 컨텍스트나 리디렉션으로 돌려줍니다.
//! 서비스와 저장소는 `web::Data<AppState>`로 주입됩니다.
//!
//! - [`accounts`] - 회원가입, 로그인, 로그아웃
//! - [`profiles`] - 프로필 조회/수정
//! - [`follows`] - 팔로우/언팔로우, 팔로잉/팔로워 목록
//! - [`home`] - 홈 화면, 헬스 체크

pub mod accounts;
pub mod profiles;
pub mod follows;
pub mod home;
pub mod session;
