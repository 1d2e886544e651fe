//! # Authentication Configuration Module
//!
//! JWT 서명, Google OAuth 클라이언트, 세션 쿠키 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"   # 또는 CLIENT_ID
//! export GOOGLE_CERTS_URL="https://www.googleapis.com/oauth2/v3/certs"
//! ```
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"     # 운영 환경에서는 필수
//! export JWT_EXPIRATION_DAYS="7"
//! ```

use super::{ConfigError, Environment, VarLookup};

/// JWT 서명 설정
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC 서명 비밀키
    pub secret: String,
    /// 토큰 유효 기간 (일)
    pub ttl_days: i64,
}

impl JwtConfig {
    pub const DEFAULT_TTL_DAYS: i64 = 7;
    const TTL_DAYS_RANGE: std::ops::RangeInclusive<i64> = 1..=365;
    const DEV_SECRET: &'static str = "dev-only-jwt-secret";

    pub(crate) fn from_vars(vars: &VarLookup<'_>, environment: &Environment) -> Result<Self, ConfigError> {
        let secret = match vars("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if environment.is_production() => return Err(ConfigError::Missing("JWT_SECRET")),
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                Self::DEV_SECRET.to_string()
            }
        };

        let ttl_days = match vars("JWT_EXPIRATION_DAYS") {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| ConfigError::Invalid {
                key: "JWT_EXPIRATION_DAYS",
                reason: e.to_string(),
            })?,
            None => Self::DEFAULT_TTL_DAYS,
        };

        if !Self::TTL_DAYS_RANGE.contains(&ttl_days) {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRATION_DAYS",
                reason: format!("{} is outside 1..=365", ttl_days),
            });
        }

        Ok(Self { secret, ttl_days })
    }

    /// 주어진 비밀키와 기본 유효 기간(7일)으로 설정을 만듭니다.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl_days: Self::DEFAULT_TTL_DAYS,
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl_days", &self.ttl_days)
            .finish()
    }
}

/// Google ID 토큰 검증 설정
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    /// ID 토큰의 `aud` 클레임과 일치해야 하는 OAuth 클라이언트 ID
    pub client_id: String,
    /// Google 공개키(JWKS) 주소
    pub certs_url: String,
}

impl GoogleOAuthConfig {
    pub const DEFAULT_CERTS_URL: &'static str = "https://www.googleapis.com/oauth2/v3/certs";

    pub(crate) fn from_vars(vars: &VarLookup<'_>) -> Result<Self, ConfigError> {
        let client_id = vars("GOOGLE_CLIENT_ID")
            .or_else(|| vars("CLIENT_ID"))
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::Missing("GOOGLE_CLIENT_ID"))?;

        Ok(Self {
            client_id,
            certs_url: vars("GOOGLE_CERTS_URL")
                .unwrap_or_else(|| Self::DEFAULT_CERTS_URL.to_string()),
        })
    }
}

/// 세션 쿠키(`token`) 설정
#[derive(Debug, Clone)]
pub struct CookieConfig {
    /// 운영 환경에서만 `Secure` 플래그를 설정합니다
    pub secure: bool,
    /// 쿠키 수명 (일), 토큰 유효 기간과 동일
    pub max_age_days: i64,
}

impl CookieConfig {
    pub const NAME: &'static str = "token";

    pub fn for_environment(environment: &Environment, jwt: &JwtConfig) -> Self {
        Self {
            secure: environment.is_production(),
            max_age_days: jwt.ttl_days,
        }
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            secure: false,
            max_age_days: JwtConfig::DEFAULT_TTL_DAYS,
        }
    }
}
