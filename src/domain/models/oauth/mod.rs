//! OAuth 프로바이더 모델
//!
//! 현재는 Google 만 지원합니다.

pub mod google_oauth_model;

pub use google_oauth_model::*;
