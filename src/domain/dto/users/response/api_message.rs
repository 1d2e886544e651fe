//! 공통 응답 본문
//!
//! 모든 인증 엔드포인트는 `["Success" | "Error", "<message>"]` 형태의
//! JSON 배열로 응답합니다.
use serde::{Deserialize, Serialize};

/// 응답 상태 단어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiStatus {
    Success,
    Error,
}

/// `[status, message]` 응답 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage(pub ApiStatus, pub String);

impl ApiMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self(ApiStatus::Success, message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self(ApiStatus::Error, message.into())
    }
}

/// 현재 세션 정보 응답 (`GET /me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    pub role: String,
}
