//! JWT 토큰 관리 서비스 구현
//!
//! 사용자 ID 와 역할을 담은 세션 토큰을 HMAC-SHA256 으로 서명합니다.
//! 토큰은 7일 동안 유효하며 갱신, 교체, 폐기 기능은 없습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::JwtConfig,
    domain::entities::users::user::User,
    domain::models::token::{IssuedToken, TokenClaims},
    errors::AppError,
};

/// JWT 토큰 관리 서비스
///
/// 서명 키는 생성 시점에 한 번 만들어 재사용합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl: Duration::days(config.ttl_days),
        }
    }

    /// 사용자를 위한 세션 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let issued = token_service.issue(&user)?;
    /// let cookie = session_cookie(&issued, &cookie_config);
    /// ```
    pub fn issue(&self, user: &User) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::InternalError("토큰 만료 시각 계산 실패".to_string()))?;

        let claims = TokenClaims {
            id: user.id_string(),
            role: user.role.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(IssuedToken { token })
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 만료된 토큰
    /// * `AppError::InvalidToken` - 잘못된 형식 또는 서명
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }
}
