//! 사용자 인증 서비스 백엔드
//!
//! 이메일/비밀번호 회원가입과 로그인, Google ID 토큰 기반 로그인을 제공하는
//! Actix-web 서비스입니다. 로그인에 성공하면 HS256 JWT 를 `token` HttpOnly 쿠키로 발급합니다.
//!
//! # Features
//!
//! - **회원가입**: bcrypt 로 해싱한 비밀번호와 함께 사용자 저장, 이메일 유니크 인덱스로 중복 차단
//! - **로컬 로그인**: 비밀번호 검증 후 7일짜리 세션 쿠키 발급
//! - **Google 로그인**: ID 토큰 서명/audience/issuer 검증, 첫 로그인 시 계정 자동 생성
//! - **MongoDB**: 사용자 데이터 영구 저장 (`USER_STORE=memory` 로 메모리 저장소 사용 가능)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 세션 쿠키
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비밀번호 해싱, JWT, Google 토큰 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (MongoDB / 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_auth_backend::config::AppConfig;
//! use user_auth_backend::core::ServiceContext;
//! use user_auth_backend::repositories::users::InMemoryUserStore;
//! use user_auth_backend::services::auth::GoogleIdTokenVerifier;
//!
//! let config = AppConfig::from_env()?;
//! let context = ServiceContext::new(
//!     Arc::new(InMemoryUserStore::new()),
//!     Arc::new(GoogleIdTokenVerifier::new(&config.google)?),
//!     &config.password,
//!     &config.jwt,
//!     config.cookie.clone(),
//! );
//! context.initialize().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
