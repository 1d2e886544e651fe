//! 사용자 인증 서비스 메인 애플리케이션
//!
//! 설정을 읽고, 사용자 저장소와 서비스들을 구성한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_auth_backend::config::{AppConfig, CorsConfig, DatabaseConfig, StoreBackend};
use user_auth_backend::core::ServiceContext;
use user_auth_backend::db::Database;
use user_auth_backend::repositories::users::{InMemoryUserStore, UserRepository, UserStore};
use user_auth_backend::routes::configure_all_routes;
use user_auth_backend::services::auth::GoogleIdTokenVerifier;
use user_auth_backend::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    init_logging();
    load_env_file();

    info!("🚀 사용자 인증 서비스 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let store = initialize_user_store(&config.database).await?;

    let verifier = GoogleIdTokenVerifier::new(&config.google).map_err(|e| {
        error!("Google ID 토큰 검증기 생성 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let context = ServiceContext::new(
        store.clone(),
        Arc::new(verifier),
        &config.password,
        &config.jwt,
        config.cookie.clone(),
    );

    context.initialize().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");
    print_startup_summary(&config, store.name());

    start_http_server(config, context).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate limiting, CORS, 로깅, 경로 정규화 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate limit 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig, context: ServiceContext) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Auth API: http://{}/api/v1/auth", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "RATE_LIMIT_PER_SECOND 와 RATE_LIMIT_BURST_SIZE 는 0 보다 커야 합니다",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        let context = context.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| context.configure(cfg))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=user_auth_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `USER_STORE` 설정에 따라 사용자 저장소를 구성합니다
///
/// MongoDB 저장소는 시작 시 연결을 확인하며, 실패하면 서버를 띄우지 않습니다.
async fn initialize_user_store(config: &DatabaseConfig) -> std::io::Result<Arc<dyn UserStore>> {
    match config.store {
        StoreBackend::Memory => {
            info!("🧪 메모리 사용자 저장소 사용 (재시작 시 데이터가 사라집니다)");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(config).await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(UserRepository::new(&database)))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 세션이 쿠키로 전달되므로 credentials 를 허용하고, Origin 은 명시적으로 나열합니다.
fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
