//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::NewUser;
//!
//! // 로컬 사용자
//! let user = NewUser::local(name, email, role, password_hash);
//!
//! // OAuth 사용자 (역할은 "Consumer" 고정)
//! let oauth_user = NewUser::oauth(name, email);
//! ```

pub mod user;

pub use user::*;
