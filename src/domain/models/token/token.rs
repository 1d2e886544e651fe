//! JWT 세션 토큰 구조체
//!
//! 토큰에는 사용자 ID 와 역할만 담습니다. 이메일이나 이름 같은 개인정보는 넣지 않습니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `id`: 저장소가 할당한 사용자 ID (ObjectId 16진수 문자열)
/// - `role`: 사용자 역할
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp, 발급 후 7일)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// 서명된 세션 토큰
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
}
