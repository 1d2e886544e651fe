//! # Domain Layer
//!
//! 엔티티, 요청/응답 DTO, 값 객체를 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   # User, NewUser, Account, UserDocument
//! ├── dto/        # SignupRequest, LoginRequest, OAuthRequest, ApiMessage
//! └── models/     # TokenClaims, GoogleIdentity, AuthenticatedUser
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
