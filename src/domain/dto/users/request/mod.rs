//! # 사용자 요청 DTO 모듈
//!
//! 클라이언트 → 서버 요청 본문 구조체를 정의합니다.

pub mod auth_request;

pub use auth_request::*;
