//! 에러 타입 모듈
//!
//! [`errors::AppError`]와 인증 흐름 구분 [`errors::AuthFlow`]를 제공합니다.

pub mod errors;

pub use errors::{AppError, AuthFlow};
