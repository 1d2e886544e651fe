//! # Core Module
//!
//! 서비스 조립과 공유를 담당합니다.
//!
//! ### [`context`] - 의존성 조립
//! - **ServiceContext**: 저장소, 검증기, 설정을 받아 서비스 인스턴스를 생성
//! - **명시적 주입**: 모든 의존성은 생성자 인자로 전달
//! - **actix 통합**: `web::Data`로 각 서비스를 핸들러에 공유
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! let context = ServiceContext::new(store, verifier, &config.password, &config.jwt, config.cookie.clone());
//! context.initialize().await?;
//!
//! HttpServer::new(move || {
//!     let context = context.clone();
//!     App::new().configure(move |cfg| {
//!         context.configure(cfg);
//!         configure_all_routes(cfg);
//!     })
//! });
//! ```

pub mod context;

pub use context::ServiceContext;
