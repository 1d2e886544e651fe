//! Authentication HTTP Handlers
//!
//! 회원가입, 비밀번호 로그인, Google 로그인을 처리하는 핸들러 함수들입니다.
//! 모든 인증 흐름은 `["Success" | "Error", "<message>"]` 배열로 응답하고,
//! 로그인에 성공하면 `token` 세션 쿠키를 설정합니다.
//!
//! # Endpoints
//!
//! - **회원가입**: `POST /auth/signup`
//! - **로컬 로그인**: `POST /auth/login`
//! - **Google 로그인/가입**: `POST /auth/oauth/google`
//! - **로그아웃**: `POST /auth/logout`
//! - **현재 세션**: `GET /auth/me`
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    config::CookieConfig,
    domain::{ApiMessage, AuthenticatedUser, LoginRequest, OAuthRequest, SessionResponse, SignupRequest},
    errors::{AppError, AuthFlow},
    middlewares::{removal_cookie, session_cookie},
    services::{
        auth::{GoogleAuthService, TokenService},
        users::UserService,
    },
};

/// 회원가입 핸들러
///
/// 같은 이메일이 이미 있으면 400 으로 응답합니다. 가입 성공 시 쿠키는 설정하지 않습니다.
///
/// # Endpoint
/// `POST /auth/signup`
#[post("/signup")]
pub async fn signup(
    payload: web::Json<SignupRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()).within(AuthFlow::Signup))?;

    user_service
        .signup(payload.into_inner())
        .await
        .map_err(|e| e.within(AuthFlow::Signup))?;

    Ok(HttpResponse::Ok().json(ApiMessage::success(
        "You have signed up successfully. You will receive a confirmation email shortly.",
    )))
}

/// 로컬 로그인 핸들러
///
/// 계정이 없거나 비밀번호가 틀리면 같은 메시지(`Invalid credentials`)로 400 응답합니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    cookie_config: web::Data<CookieConfig>,
) -> Result<HttpResponse, AppError> {
    let user = user_service
        .verify_password(&payload.email, &payload.password)
        .await
        .map_err(|e| e.within(AuthFlow::Login))?;

    let issued = token_service
        .issue(&user)
        .map_err(|e| e.within(AuthFlow::Login))?;

    log::info!("로컬 로그인 성공 - 사용자: {}, ID: {}", user.email, user.id_string());

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&issued, &cookie_config))
        .json(ApiMessage::success("You have logged in successfully")))
}

/// Google 로그인/가입 핸들러
///
/// 기존 계정이면 200, 새 계정을 만들었으면 201 로 응답하며 둘 다 세션 쿠키를 설정합니다.
///
/// # Endpoint
/// `POST /auth/oauth/google`
#[post("/oauth/google")]
pub async fn oauth(
    payload: web::Json<OAuthRequest>,
    google_auth_service: web::Data<GoogleAuthService>,
    token_service: web::Data<TokenService>,
    cookie_config: web::Data<CookieConfig>,
) -> Result<HttpResponse, AppError> {
    let outcome = google_auth_service
        .authenticate(&payload.token)
        .await
        .map_err(|e| e.within(AuthFlow::OAuth))?;

    let issued = token_service
        .issue(&outcome.user)
        .map_err(|e| e.within(AuthFlow::OAuth))?;

    let cookie = session_cookie(&issued, &cookie_config);

    if outcome.created {
        Ok(HttpResponse::Created()
            .cookie(cookie)
            .json(ApiMessage::success("Account created and logged in successfully")))
    } else {
        Ok(HttpResponse::Ok()
            .cookie(cookie)
            .json(ApiMessage::success("Login Successful")))
    }
}

/// 로그아웃 핸들러
///
/// 세션 쿠키를 만료시킵니다. 토큰 자체는 서버에 저장되지 않으므로 폐기하지 않습니다.
///
/// # Endpoint
/// `POST /auth/logout`
#[post("/logout")]
pub async fn logout(cookie_config: web::Data<CookieConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(removal_cookie(&cookie_config))
        .json(ApiMessage::success("You have logged out successfully"))
}

/// 현재 세션 정보 조회
///
/// # Endpoint
/// `GET /auth/me`
#[get("/me")]
pub async fn me(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse {
        id: user.user_id,
        role: user.role,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::cookie::{time::Duration, SameSite};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::{
        config::{CookieConfig, JwtConfig, PasswordConfig},
        core::ServiceContext,
        domain::entities::users::user::Account,
        repositories::users::{InMemoryUserStore, UserStore},
        routes::configure_all_routes,
        services::auth::{google_id_token::testing::StubVerifier, IdTokenError},
    };

    fn context(store: Arc<InMemoryUserStore>, verifier: StubVerifier) -> ServiceContext {
        ServiceContext::new(
            store,
            Arc::new(verifier),
            &PasswordConfig { bcrypt_cost: 4 },
            &JwtConfig::with_secret("handler-test-secret"),
            CookieConfig::default(),
        )
    }

    macro_rules! app {
        ($context:expr) => {{
            let context = $context;
            test::init_service(App::new().configure(move |cfg| {
                context.configure(cfg);
                configure_all_routes(cfg);
            }))
            .await
        }};
    }

    fn signup_body() -> Value {
        json!({ "name": "A", "email": "a@x.com", "role": "Consumer", "password": "p1" })
    }

    #[actix_web::test]
    async fn test_signup_then_duplicate() {
        let store = Arc::new(InMemoryUserStore::new());
        let app = app!(context(store.clone(), StubVerifier::new()));

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(signup_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!(["Success", "You have signed up successfully. You will receive a confirmation email shortly."])
        );

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(signup_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!(["Error", "User with email a@x.com already exists"]));

        assert_eq!(store.len(), 1);
        let stored = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert!(matches!(stored.account, Account::Local { ref password_hash } if password_hash != "p1"));
    }

    #[actix_web::test]
    async fn test_signup_missing_field_is_bad_request() {
        let app = app!(context(Arc::new(InMemoryUserStore::new()), StubVerifier::new()));

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(json!({ "name": "A", "email": "a@x.com", "password": "p1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0], "Error");

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(json!({ "name": "", "email": "a@x.com", "role": "Consumer", "password": "p1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_login_sets_cookie_and_me_reads_it() {
        let app = app!(context(Arc::new(InMemoryUserStore::new()), StubVerifier::new()));

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(signup_body())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "a@x.com", "password": "p1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "token")
            .map(|c| c.into_owned())
            .expect("login must set the token cookie");
        assert_eq!(cookie.http_only(), Some(true));
        assert_ne!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
        assert_eq!(cookie.path(), Some("/"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!(["Success", "You have logged in successfully"]));

        let req = test::TestRequest::get().uri("/api/v1/auth/me").cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["role"], "Consumer");
        assert_eq!(body["id"].as_str().unwrap().len(), 24);
    }

    #[actix_web::test]
    async fn test_wrong_password_and_unknown_email_look_identical() {
        let app = app!(context(Arc::new(InMemoryUserStore::new()), StubVerifier::new()));

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(signup_body())
            .to_request();
        test::call_service(&app, req).await;

        let mut bodies = Vec::new();
        for body in [
            json!({ "email": "a@x.com", "password": "wrong" }),
            json!({ "email": "nobody@x.com", "password": "p1" }),
        ] {
            let req = test::TestRequest::post().uri("/api/v1/auth/login").set_json(body).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert!(resp.response().cookies().next().is_none());
            bodies.push(test::read_body_json::<Value, _>(resp).await);
        }

        assert_eq!(bodies[0], json!(["Error", "Invalid credentials"]));
        assert_eq!(bodies[0], bodies[1]);
    }

    #[actix_web::test]
    async fn test_oauth_creates_then_logs_in() {
        let store = Arc::new(InMemoryUserStore::new());
        let verifier = StubVerifier::new().identity("google-token", "g@gmail.com", true);
        let app = app!(context(store.clone(), verifier));

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/oauth/google")
            .set_json(json!({ "token": "google-token" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert!(resp.response().cookies().any(|c| c.name() == "token"));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!(["Success", "Account created and logged in successfully"]));

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/oauth/google")
            .set_json(json!({ "token": "google-token" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.response().cookies().any(|c| c.name() == "token"));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!(["Success", "Login Successful"]));

        assert_eq!(store.len(), 1);
        let stored = store.find_by_email("g@gmail.com").await.unwrap().unwrap();
        assert_eq!(stored.account, Account::OAuth);
        assert_eq!(stored.account.password_hash(), None);
        assert_eq!(stored.role, "Consumer");
    }

    #[actix_web::test]
    async fn test_oauth_failure_statuses() {
        let verifier = StubVerifier::new()
            .identity("unverified", "u@gmail.com", false)
            .failure("late", IdTokenError::Expired)
            .failure("forged", IdTokenError::Invalid("bad signature".into()))
            .failure("down", IdTokenError::Unavailable("connect timeout".into()));
        let app = app!(context(Arc::new(InMemoryUserStore::new()), verifier));

        let cases = [
            ("unverified", StatusCode::BAD_REQUEST, "Email not verified by Google"),
            ("late", StatusCode::UNAUTHORIZED, "Token expired. Please try again."),
            ("forged", StatusCode::UNAUTHORIZED, "Invalid authentication token."),
            ("down", StatusCode::INTERNAL_SERVER_ERROR, "Authentication failed. Please try again."),
        ];

        for (token, status, message) in cases {
            let req = test::TestRequest::post()
                .uri("/api/v1/auth/oauth/google")
                .set_json(json!({ "token": token }))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), status, "token {}", token);
            assert!(resp.response().cookies().next().is_none());
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!(["Error", message]));
        }
    }

    #[actix_web::test]
    async fn test_me_without_cookie_is_unauthorized() {
        let app = app!(context(Arc::new(InMemoryUserStore::new()), StubVerifier::new()));

        let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_logout_clears_cookie() {
        let app = app!(context(Arc::new(InMemoryUserStore::new()), StubVerifier::new()));

        let req = test::TestRequest::post().uri("/api/v1/auth/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp.response().cookies().find(|c| c.name() == "token").unwrap();
        assert_eq!(cookie.value(), "");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app!(context(Arc::new(InMemoryUserStore::new()), StubVerifier::new()));

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0], "Error");
    }
}
