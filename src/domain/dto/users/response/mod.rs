//! # 사용자 관련 응답 DTO 모듈
//!
//! 비밀번호 해시 등 민감한 정보는 응답에 포함하지 않습니다.
//! 인증 흐름의 응답은 모두 [`ApiMessage`] 배열 형태이고,
//! 세션 조회만 [`SessionResponse`] 객체를 반환합니다.

pub mod api_message;

pub use api_message::*;
