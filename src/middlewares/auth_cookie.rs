//! 세션 쿠키 처리
//!
//! 로그인 성공 시 발급하는 `token` 쿠키를 만들고,
//! 이후 요청에서 쿠키를 읽어 [`AuthenticatedUser`]로 추출합니다.
//!
//! ## 쿠키 속성
//!
//! - 이름 `token`, `Path=/`
//! - `HttpOnly`, `SameSite=Lax`
//! - `Secure`는 운영 환경에서만
//! - `Max-Age` 7일

use std::future::{ready, Ready};

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{web, FromRequest, HttpRequest};

use crate::{
    config::CookieConfig,
    domain::models::{auth::AuthenticatedUser, token::IssuedToken},
    errors::{AppError, AuthFlow},
    services::auth::TokenService,
};

/// 로그인 성공 시 설정할 세션 쿠키
pub fn session_cookie(issued: &IssuedToken, config: &CookieConfig) -> Cookie<'static> {
    Cookie::build(CookieConfig::NAME, issued.token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .max_age(Duration::days(config.max_age_days))
        .finish()
}

/// 로그아웃 시 세션 쿠키를 지우는 쿠키
pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    Cookie::build(CookieConfig::NAME, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .max_age(Duration::ZERO)
        .finish()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

    let cookie = req.cookie(CookieConfig::NAME).ok_or(AppError::Unauthenticated)?;
    if cookie.value().is_empty() {
        return Err(AppError::Unauthenticated);
    }

    let claims = token_service.verify(cookie.value())?;
    log::debug!("세션 인증 성공: 사용자 ID {}", claims.id);

    Ok(AuthenticatedUser::from(claims))
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(authenticate(req).map_err(|e| e.within(AuthFlow::Session)))
    }
}
