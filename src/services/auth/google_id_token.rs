//! # Google ID 토큰 검증기
//!
//! Google Identity Services 가 브라우저에 발급한 ID 토큰을 서버에서 검증합니다.
//!
//! ## 검증 항목
//!
//! 1. 헤더의 `kid`로 Google 공개키(JWKS)를 찾아 RS256 서명 검증
//! 2. `aud`가 설정된 OAuth 클라이언트 ID 와 일치
//! 3. `iss`가 `accounts.google.com` 또는 `https://accounts.google.com`
//! 4. `exp`가 지나지 않음
//!
//! 공개키는 한 시간 동안 캐시하며, 캐시에 없는 `kid`가 오면 한 번 다시 받아옵니다.
//! 재요청은 마지막 조회 후 60초가 지나야 허용됩니다.

use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{
    decode, decode_header, errors::ErrorKind, jwk::JwkSet, Algorithm, DecodingKey, Validation,
};
use thiserror::Error;

use crate::{
    config::GoogleOAuthConfig,
    domain::models::oauth::{GoogleIdTokenClaims, GoogleIdentity},
    errors::AppError,
};

const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];
const JWKS_CACHE_TTL: Duration = Duration::from_secs(60 * 60);
const JWKS_MIN_REFETCH: Duration = Duration::from_secs(60);
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// ID 토큰 검증 실패 사유
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdTokenError {
    /// 만료된 토큰
    #[error("Token used too late")]
    Expired,

    /// 형식, 서명, audience, issuer 중 하나가 올바르지 않음
    #[error("Invalid token: {0}")]
    Invalid(String),

    /// 공개키를 받아오지 못함
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

impl From<IdTokenError> for AppError {
    fn from(error: IdTokenError) -> Self {
        match error {
            IdTokenError::Expired => AppError::TokenExpired,
            IdTokenError::Invalid(detail) => {
                log::debug!("ID 토큰 거부: {}", detail);
                AppError::InvalidToken
            }
            IdTokenError::Unavailable(detail) => AppError::ExternalServiceError(detail),
        }
    }
}

/// 외부 신원 제공자의 ID 토큰 검증기
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity, IdTokenError>;
}

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

/// Google 공개키 기반 ID 토큰 검증기
pub struct GoogleIdTokenVerifier {
    http: reqwest::Client,
    client_id: String,
    certs_url: String,
    cache: RwLock<Option<CachedKeys>>,
}

impl GoogleIdTokenVerifier {
    pub fn new(config: &GoogleOAuthConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            http,
            client_id: config.client_id.clone(),
            certs_url: config.certs_url.clone(),
            cache: RwLock::new(None),
        })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.client_id.as_str()]);
        validation.set_issuer(&GOOGLE_ISSUERS);
        validation
    }

    /// 캐시가 유효하고 `kid`가 있으면 해당 키를 돌려줍니다.
    fn cached_key(&self, kid: &str) -> Result<Option<DecodingKey>, IdTokenError> {
        let cache = self
            .cache
            .read()
            .map_err(|_| IdTokenError::Unavailable("JWKS cache lock poisoned".to_string()))?;

        match cache.as_ref() {
            Some(cached) if cached.fetched_at.elapsed() < JWKS_CACHE_TTL => {
                cached.keys.find(kid).map(key_from_jwk).transpose()
            }
            _ => Ok(None),
        }
    }

    /// 마지막 조회 후 재요청 최소 간격이 지나지 않았는지 여부
    fn fetched_recently(&self) -> bool {
        self.cache
            .read()
            .map(|cache| {
                cache
                    .as_ref()
                    .is_some_and(|cached| cached.fetched_at.elapsed() < JWKS_MIN_REFETCH)
            })
            .unwrap_or(false)
    }

    async fn fetch_keys(&self) -> Result<JwkSet, IdTokenError> {
        log::debug!("Google 공개키 요청: {}", self.certs_url);

        let response = self
            .http
            .get(&self.certs_url)
            .send()
            .await
            .map_err(|e| IdTokenError::Unavailable(format!("Google 공개키 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(IdTokenError::Unavailable(format!(
                "Google 공개키 조회 실패: HTTP {}",
                response.status()
            )));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| IdTokenError::Unavailable(format!("Google 공개키 파싱 실패: {}", e)))
    }

    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, IdTokenError> {
        if let Some(key) = self.cached_key(kid)? {
            return Ok(key);
        }

        if self.fetched_recently() {
            return Err(IdTokenError::Invalid(format!("unknown signing key: {}", kid)));
        }

        let keys = self.fetch_keys().await?;
        let key = keys.find(kid).map(key_from_jwk).transpose()?;

        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(CachedKeys {
                keys,
                fetched_at: Instant::now(),
            });
        }

        key.ok_or_else(|| IdTokenError::Invalid(format!("unknown signing key: {}", kid)))
    }
}

#[async_trait]
impl IdTokenVerifier for GoogleIdTokenVerifier {
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity, IdTokenError> {
        let header = decode_header(id_token).map_err(classify)?;
        let kid = header
            .kid
            .ok_or_else(|| IdTokenError::Invalid("missing kid".to_string()))?;

        let key = self.decoding_key(&kid).await?;
        let token_data = decode::<GoogleIdTokenClaims>(id_token, &key, &self.validation()).map_err(classify)?;

        identity_from_claims(token_data.claims)
    }
}

fn key_from_jwk(jwk: &jsonwebtoken::jwk::Jwk) -> Result<DecodingKey, IdTokenError> {
    DecodingKey::from_jwk(jwk).map_err(|e| IdTokenError::Invalid(format!("unusable signing key: {}", e)))
}

/// jsonwebtoken 에러를 만료/무효로 분류합니다.
fn classify(error: jsonwebtoken::errors::Error) -> IdTokenError {
    match error.kind() {
        ErrorKind::ExpiredSignature => IdTokenError::Expired,
        _ => IdTokenError::Invalid(error.to_string()),
    }
}

fn identity_from_claims(claims: GoogleIdTokenClaims) -> Result<GoogleIdentity, IdTokenError> {
    let email = claims
        .email
        .filter(|email| !email.is_empty())
        .ok_or_else(|| IdTokenError::Invalid("missing email claim".to_string()))?;

    Ok(GoogleIdentity {
        subject: claims.sub,
        email,
        email_verified: claims.email_verified,
        name: claims.name,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn verifier() -> GoogleIdTokenVerifier {
        GoogleIdTokenVerifier::new(&GoogleOAuthConfig {
            client_id: "client.apps.googleusercontent.com".to_string(),
            certs_url: "http://127.0.0.1:9/certs".to_string(),
        })
        .unwrap()
    }

    #[actix_web::test]
    async fn test_unknown_kid_within_refetch_interval_skips_network() {
        let verifier = verifier();
        if let Ok(mut cache) = verifier.cache.write() {
            *cache = Some(CachedKeys {
                keys: JwkSet { keys: Vec::new() },
                fetched_at: Instant::now(),
            });
        }

        let mut header = Header::new(Algorithm::HS256);
        header.kid = Some("forged-kid".to_string());
        let token = encode(
            &header,
            &serde_json::json!({ "sub": "1", "email": "a@gmail.com", "exp": 4102444800u64 }),
            &EncodingKey::from_secret(b"forged"),
        )
        .unwrap();

        // certs_url 은 닫힌 포트이므로 요청했다면 Unavailable 이 됩니다
        let result = verifier.verify(&token).await;
        assert_eq!(
            result,
            Err(IdTokenError::Invalid("unknown signing key: forged-kid".to_string()))
        );
    }

    #[test]
    fn test_classify_expired_signature() {
        let expired = jsonwebtoken::errors::Error::from(ErrorKind::ExpiredSignature);
        assert_eq!(classify(expired), IdTokenError::Expired);

        let audience = jsonwebtoken::errors::Error::from(ErrorKind::InvalidAudience);
        assert!(matches!(classify(audience), IdTokenError::Invalid(_)));
    }

    #[test]
    fn test_provider_errors_map_to_app_errors() {
        assert!(matches!(AppError::from(IdTokenError::Expired), AppError::TokenExpired));
        assert!(matches!(AppError::from(IdTokenError::Invalid("x".into())), AppError::InvalidToken));
        assert!(matches!(
            AppError::from(IdTokenError::Unavailable("x".into())),
            AppError::ExternalServiceError(_)
        ));
    }

    #[test]
    fn test_identity_requires_email() {
        let claims: GoogleIdTokenClaims =
            serde_json::from_value(serde_json::json!({ "sub": "1", "email_verified": true })).unwrap();
        assert!(matches!(identity_from_claims(claims), Err(IdTokenError::Invalid(_))));
    }

    #[actix_web::test]
    async fn test_malformed_token_is_invalid_without_network() {
        let result = verifier().verify("definitely.not.a-jwt").await;
        assert!(matches!(result, Err(IdTokenError::Invalid(_))));
    }

    #[actix_web::test]
    async fn test_token_without_kid_is_invalid_without_network() {
        let token = encode(
            &Header::default(),
            &serde_json::json!({ "sub": "1", "email": "a@gmail.com", "exp": 4102444800u64 }),
            &EncodingKey::from_secret(b"forged"),
        )
        .unwrap();

        let result = verifier().verify(&token).await;
        assert_eq!(result, Err(IdTokenError::Invalid("missing kid".to_string())));
    }
}
