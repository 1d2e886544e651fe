//! 인증 및 보안 서비스 모듈
//!
//! 세션 토큰 발급과 Google ID 토큰 기반 로그인을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 7일 유효 세션 JWT 발급/검증 (HMAC-SHA256)
//! - Google ID 토큰 서명/audience/issuer 검증
//! - Google 계정으로 로그인 또는 자동 가입
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{GoogleAuthService, TokenService};
//!
//! let login = google_auth.authenticate(&payload.token).await?;
//! let issued = token_service.issue(&login.user)?;
//! ```

pub mod token_service;
pub mod google_id_token;
pub mod google_auth_service;

pub use token_service::*;
pub use google_id_token::{GoogleIdTokenVerifier, IdTokenError, IdTokenVerifier};
pub use google_auth_service::*;
