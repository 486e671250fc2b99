//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 주입받아 생성되며, `AppState`가 하나씩 보관합니다.
//!
//! - [`users`] - 회원가입, 비밀번호 강도 검증, 프로필 조회/수정
//! - [`auth`] - 비밀번호 해싱, 세션 토큰, 로그인/로그아웃
//! - [`follows`] - 팔로우/언팔로우와 목록 조회

pub mod users;
pub mod auth;
pub mod follows;
