//! API 라우트 설정 모듈
//!
//! 인증 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//! 잘못된 JSON 본문은 핸들러에 도달하기 전에 `["Error", "<detail>"]` 400 응답으로 처리됩니다.
//!
//! # Routes
//!
//! | Method | Path                         | Handler                         |
//! |--------|------------------------------|---------------------------------|
//! | GET    | `/health`                    | [`health_check`]                |
//! | POST   | `/api/v1/auth/signup`        | [`handlers::auth::signup`]      |
//! | POST   | `/api/v1/auth/login`         | [`handlers::auth::login`]       |
//! | POST   | `/api/v1/auth/oauth/google`  | [`handlers::auth::oauth`]       |
//! | POST   | `/api/v1/auth/logout`        | [`handlers::auth::logout`]      |
//! | GET    | `/api/v1/auth/me`            | [`handlers::auth::me`]          |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::domain::ApiMessage;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Examples
///
/// ```bash
/// # 회원가입
/// curl -X POST http://localhost:8080/api/v1/auth/signup \
///   -H "Content-Type: application/json" \
///   -d '{"name":"A","email":"a@x.com","role":"Consumer","password":"p1"}'
///
/// # 로컬 로그인 (token 쿠키 저장)
/// curl -c cookies.txt -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"a@x.com","password":"p1"}'
///
/// # 현재 세션
/// curl -b cookies.txt http://localhost:8080/api/v1/auth/me
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::signup)
            .service(handlers::auth::login)
            .service(handlers::auth::oauth)
            .service(handlers::auth::logout)
            .service(handlers::auth::me),
    );
}

/// JSON 본문 파싱 실패를 API 응답 형식으로 변환합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("잘못된 요청 본문 ({}): {}", req.path(), err);

    let detail = err.to_string();
    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiMessage::error(detail)),
    )
    .into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_auth_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
