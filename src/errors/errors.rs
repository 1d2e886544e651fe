//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 모든 에러 응답 본문은
//! `["Error", "<message>"]` 형태의 JSON 배열입니다.
//!
//! 에러는 두 부류로 나뉩니다.
//!
//! - **클라이언트 에러** (400/401): 중복 이메일, 잘못된 자격 증명, 미인증 이메일,
//!   만료/위조된 토큰. 구체적인 메시지를 그대로 호출자에게 전달합니다.
//! - **인프라 에러** (500): 데이터베이스, 해싱, 외부 서비스 장애.
//!   상세 내용은 서버 로그에만 남기고 호출자에게는 흐름별 일반 메시지만 보냅니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AuthFlow};
//!
//! let user = user_service
//!     .verify_password(&payload.email, &payload.password)
//!     .await
//!     .map_err(|e| e.within(AuthFlow::Login))?;
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::ApiMessage;

/// 인증 흐름 구분
///
/// 인프라 에러를 호출자에게 노출할 때 사용할 일반 메시지와 로그 라벨을 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    Signup,
    Login,
    OAuth,
    Session,
}

impl AuthFlow {
    /// 500 응답에 사용할 일반 메시지
    pub fn generic_failure_message(&self) -> &'static str {
        match self {
            AuthFlow::Signup => "An error occurred during signup",
            AuthFlow::Login => "An error occurred during login",
            AuthFlow::OAuth => "Authentication failed. Please try again.",
            AuthFlow::Session => "An error occurred while reading the session",
        }
    }

    fn log_label(&self) -> &'static str {
        match self {
            AuthFlow::Signup => "Signup error",
            AuthFlow::Login => "Login error",
            AuthFlow::OAuth => "OAuth Error",
            AuthFlow::Session => "Session error",
        }
    }
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 이미 가입된 이메일 (400)
    #[error("User with email {0} already exists")]
    DuplicateAccount(String),

    /// 존재하지 않는 계정 또는 비밀번호 불일치 (400)
    ///
    /// 계정 존재 여부가 드러나지 않도록 두 경우 모두 같은 메시지를 사용합니다.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Google 이 이메일 인증을 보증하지 않음 (400)
    #[error("Email not verified by Google")]
    EmailNotVerified,

    /// 필수 입력값 누락 (400)
    #[error("{0}")]
    ValidationError(String),

    /// 만료된 토큰 (401)
    #[error("Token expired. Please try again.")]
    TokenExpired,

    /// 서명/형식/audience 가 올바르지 않은 토큰 (401)
    #[error("Invalid authentication token.")]
    InvalidToken,

    /// 세션 쿠키 없음 (401)
    #[error("Authentication required")]
    Unauthenticated,

    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 비밀번호 해싱/검증 실패 (500)
    #[error("Password hashing error: {0}")]
    HashingError(String),

    /// 외부 서비스(Google) 에러 (500)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// 흐름별 일반 메시지로 가려진 인프라 에러 (500)
    #[error("{}", .0.generic_failure_message())]
    Unexpected(AuthFlow),
}

impl AppError {
    /// 호출자에게 그대로 알려도 되는 에러인지 여부
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// 에러를 로그에 남기고, 인프라 에러는 흐름별 일반 메시지로 바꿉니다.
    pub fn within(self, flow: AuthFlow) -> AppError {
        match self {
            AppError::Unexpected(_) => self,
            e if e.is_client_error() => {
                log::warn!("{}: {}", flow.log_label(), e);
                e
            }
            e => {
                log::error!("{}: {}", flow.log_label(), e);
                AppError::Unexpected(flow)
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateAccount(_)
            | AppError::InvalidCredentials
            | AppError::EmailNotVerified
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::TokenExpired | AppError::InvalidToken | AppError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 인프라 에러가 [`AppError::within`]을 거치지 않고 올라온 경우에도
    /// 상세 내용을 노출하지 않도록 일반 메시지로 응답합니다.
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::DatabaseError(_)
            | AppError::HashingError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ApiMessage::error(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_duplicate_account_response() {
        let (status, body) = body_of(AppError::DuplicateAccount("a@x.com".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!(["Error", "User with email a@x.com already exists"]));
    }

    #[actix_web::test]
    async fn test_token_errors_are_unauthorized() {
        let (status, body) = body_of(AppError::TokenExpired).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body[1], "Token expired. Please try again.");

        let (status, body) = body_of(AppError::InvalidToken).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body[1], "Invalid authentication token.");
    }

    #[actix_web::test]
    async fn test_infrastructure_detail_never_reaches_caller() {
        let (status, body) = body_of(AppError::DatabaseError("connection refused 10.0.0.3".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body[1].as_str().unwrap().contains("10.0.0.3"));
    }

    #[test]
    fn test_within_masks_infrastructure_errors() {
        let masked = AppError::HashingError("cost out of range".to_string()).within(AuthFlow::Signup);
        assert!(matches!(masked, AppError::Unexpected(AuthFlow::Signup)));
        assert_eq!(masked.to_string(), "An error occurred during signup");

        let oauth = AppError::ExternalServiceError("jwks timeout".to_string()).within(AuthFlow::OAuth);
        assert_eq!(oauth.to_string(), "Authentication failed. Please try again.");
    }

    #[test]
    fn test_within_keeps_client_errors() {
        let kept = AppError::InvalidCredentials.within(AuthFlow::Login);
        assert!(matches!(kept, AppError::InvalidCredentials));
        assert_eq!(kept.status_code(), StatusCode::BAD_REQUEST);
    }
}
