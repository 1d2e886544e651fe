//! # Domain Models
//!
//! 저장되지 않는 도메인 값 객체들입니다.
//!
//! - [`token`] - 세션 JWT 클레임
//! - [`oauth`] - Google ID 토큰 클레임과 검증된 신원
//! - [`auth`] - 요청에서 추출한 인증 사용자

pub mod auth;
pub mod oauth;
pub mod token;

pub use auth::*;
pub use oauth::*;
pub use token::*;
