//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수는 `main`에서 [`AppConfig::from_env`]로 한 번만 읽고,
//! 만들어진 설정 구조체를 각 서비스 생성자에 명시적으로 넘깁니다.
//! 서비스 내부에서 환경 변수를 직접 조회하지 않으므로 테스트에서 설정을 자유롭게 바꿀 수 있습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터베이스, 서버, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT, Google OAuth, 세션 쿠키 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use user_auth_backend::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("bind: {}", config.server.bind_address());
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use thiserror::Error;

/// 환경 변수 조회 함수 (테스트에서는 HashMap 기반 클로저로 대체)
pub(crate) type VarLookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

/// 설정 로딩 에러
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub password: PasswordConfig,
    pub jwt: JwtConfig,
    pub google: GoogleOAuthConfig,
    pub cookie: CookieConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수로부터 설정을 구성합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(vars: &VarLookup<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::from_vars(vars);
        let jwt = JwtConfig::from_vars(vars, &environment)?;
        let cookie = CookieConfig::for_environment(&environment, &jwt);

        Ok(Self {
            database: DatabaseConfig::from_vars(vars)?,
            server: ServerConfig::from_vars(vars)?,
            rate_limit: RateLimitConfig::from_vars(vars)?,
            cors: CorsConfig::from_vars(vars),
            password: PasswordConfig::from_vars(vars)?,
            google: GoogleOAuthConfig::from_vars(vars)?,
            jwt,
            cookie,
            environment,
        })
    }
}
