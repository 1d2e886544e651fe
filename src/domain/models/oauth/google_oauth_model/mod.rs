//! Google OAuth 모델
//!
//! ID 토큰 클레임과 검증된 사용자 신원을 정의합니다.

pub mod google_user;

pub use google_user::*;
