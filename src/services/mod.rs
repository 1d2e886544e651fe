//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 모두 생성자로 설정과 의존성을 받으며, [`crate::core::context::ServiceContext`]가
//! 한 번 조립해 `web::Data`로 핸들러에 공유합니다.
//!
//! # Features
//!
//! - 로컬 계정 가입 및 비밀번호 검증
//! - 세션 JWT 발급/검증
//! - Google ID 토큰 로그인/가입
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::TokenService};
//!
//! let user = user_service.verify_password(&email, &password).await?;
//! let issued = token_service.issue(&user)?;
//! ```

pub mod users;
pub mod auth;
