//! Data Transfer Objects
//!
//! HTTP 요청/응답 본문 구조체 모음입니다.

pub mod users;

pub use users::*;
