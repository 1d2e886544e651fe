//! 사용자 관리 서비스 모듈
//!
//! 로컬 계정 가입과 비밀번호 로그인 검증을 담당하는 [`UserService`]를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(store, &config.password);
//! let user = user_service.verify_password(&email, &password).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
