//! 인증 관련 요청 처리 모듈
//!
//! 세션 쿠키 생성과 쿠키 기반 사용자 추출을 제공합니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! async fn me(user: AuthenticatedUser) -> HttpResponse {
//!     HttpResponse::Ok().json(user)
//! }
//! ```

pub mod auth_cookie;

pub use auth_cookie::{removal_cookie, session_cookie};
