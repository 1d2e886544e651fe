//! # Data & Server Configuration
//!
//! 실행 환경, MongoDB 연결, HTTP 서버, 비밀번호 해싱 관련 설정을 정의합니다.
//! 모든 설정은 프로세스 시작 시 한 번 읽혀 구조체로 만들어지고,
//! 이후에는 생성자를 통해 각 컴포넌트에 명시적으로 전달됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"        # development, test, staging, production
//! export MONGO_URI="mongodb://host:27017/user_auth"
//! export DATABASE_NAME="user_auth"
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export BCRYPT_COST="10"
//! export USER_STORE="mongodb"           # mongodb (기본값) 또는 memory
//! ```

use super::{ConfigError, VarLookup};

/// 실행 환경
///
/// `ENVIRONMENT`를 우선 확인하고, 없으면 `NODE_ENV`를 사용합니다.
/// 둘 다 없으면 개발 환경으로 간주합니다 (쿠키 `Secure` 플래그 비활성).
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub(crate) fn from_vars(vars: &VarLookup<'_>) -> Self {
        vars("ENVIRONMENT")
            .or_else(|| vars("NODE_ENV"))
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Development)
    }

    /// 문자열에서 환경 값을 해석합니다.
    ///
    /// `production`/`prod`만 운영 환경입니다. `local`, `qa` 처럼 알 수 없는 값은 개발 환경으로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 사용자 저장소 종류 (`USER_STORE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

impl StoreBackend {
    pub(crate) fn from_vars(vars: &VarLookup<'_>) -> Result<Self, ConfigError> {
        match vars("USER_STORE").map(|v| v.trim().to_lowercase()) {
            None => Ok(StoreBackend::MongoDb),
            Some(v) if v.is_empty() || v == "mongodb" || v == "mongo" => Ok(StoreBackend::MongoDb),
            Some(v) if v == "memory" => Ok(StoreBackend::Memory),
            Some(v) => Err(ConfigError::Invalid {
                key: "USER_STORE",
                reason: format!("unknown store '{}'", v),
            }),
        }
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub store: StoreBackend,
    /// 명시적으로 지정된 연결 문자열 (`MONGO_URI`)
    pub mongo_uri: Option<String>,
    /// 연결 문자열에 기본 데이터베이스가 없을 때 사용할 이름
    pub database_name: String,
}

impl DatabaseConfig {
    pub const DEFAULT_DATABASE_NAME: &'static str = "user_auth";

    pub(crate) fn from_vars(vars: &VarLookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            store: StoreBackend::from_vars(vars)?,
            mongo_uri: vars("MONGO_URI").filter(|uri| !uri.trim().is_empty()),
            database_name: vars("DATABASE_NAME")
                .unwrap_or_else(|| Self::DEFAULT_DATABASE_NAME.to_string()),
        })
    }

    /// 실제로 사용할 연결 문자열을 결정합니다.
    ///
    /// `MONGO_URI`가 있으면 그대로, 없으면 로컬 기본 주소에 데이터베이스 이름을 붙입니다.
    pub fn connection_string(&self) -> String {
        match &self.mongo_uri {
            Some(uri) => uri.clone(),
            None => format!("mongodb://localhost:27017/{}", self.database_name),
        }
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub(crate) fn from_vars(vars: &VarLookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: vars("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or("PORT", vars("PORT"), 8080)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn from_vars(vars: &VarLookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", vars("RATE_LIMIT_PER_SECOND"), 100)?,
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", vars("RATE_LIMIT_BURST_SIZE"), 200)?,
        })
    }
}

/// CORS 허용 Origin 설정
///
/// 쿠키 기반 인증이므로 credentials 를 허용하는 명시적 Origin 목록이 필요합니다.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub(crate) fn from_vars(vars: &VarLookup<'_>) -> Self {
        let allowed_origins = match vars("CORS_ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        };

        Self { allowed_origins }
    }
}

/// 비밀번호 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub const DEFAULT_COST: u32 = 10;

    pub(crate) fn from_vars(vars: &VarLookup<'_>) -> Result<Self, ConfigError> {
        let bcrypt_cost = parse_or("BCRYPT_COST", vars("BCRYPT_COST"), Self::DEFAULT_COST)?;

        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                reason: format!("{} is outside 4..=31", bcrypt_cost),
            });
        }

        Ok(Self { bcrypt_cost })
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: Self::DEFAULT_COST }
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
