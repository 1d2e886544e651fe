//! # User Data Transfer Objects Module
//!
//! 사용자 인증 API 의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! users/
//! ├── request/      # 클라이언트 → 서버 (SignupRequest, LoginRequest, OAuthRequest)
//! └── response/     # 서버 → 클라이언트 (ApiMessage, SessionResponse)
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
