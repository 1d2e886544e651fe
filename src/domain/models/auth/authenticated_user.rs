use serde::{Deserialize, Serialize};

use crate::domain::models::token::TokenClaims;

/// 세션 쿠키의 JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 사용자 역할
    pub role: String,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.id,
            role: claims.role,
        }
    }
}
