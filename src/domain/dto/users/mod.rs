//! # User Data Transfer Objects Module
//!
//! 계정 화면의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/                  # 클라이언트 → 서버 (폼)
//! │   ├── signup_request.rs     # 회원가입
//! │   ├── login_request.rs      # 로그인
//! │   └── profile_edit_request.rs # 프로필 수정
//! └── response/                 # 서버 → 클라이언트
//!     ├── user_response.rs      # 사용자/프로필/목록
//!     └── form_response.rs      # 폼 렌더링 컨텍스트
//! ```

pub mod request;
pub mod response;
