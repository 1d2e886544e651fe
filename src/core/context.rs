//! # 서비스 컨텍스트
//!
//! 애플리케이션의 서비스 그래프를 한 곳에서 조립합니다.
//! 저장소와 ID 토큰 검증기는 트레이트 객체로 주입되므로
//! 운영(MongoDB + Google)과 테스트(메모리 + 스텁)가 같은 조립 코드를 사용합니다.
//!
//! ```text
//! ServiceContext
//! ├── UserService          ← Arc<dyn UserStore>, PasswordConfig
//! ├── GoogleAuthService    ← Arc<dyn IdTokenVerifier>, Arc<dyn UserStore>
//! ├── TokenService         ← JwtConfig
//! └── CookieConfig
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::{
    config::{CookieConfig, JwtConfig, PasswordConfig},
    errors::AppError,
    repositories::users::UserStore,
    services::{
        auth::{GoogleAuthService, IdTokenVerifier, TokenService},
        users::UserService,
    },
    utils::display_terminal::{print_boxed_title, print_step_complete, print_step_start, print_sub_task},
};

/// 핸들러가 공유하는 서비스 묶음
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<dyn UserStore>,
    pub user_service: web::Data<UserService>,
    pub google_auth_service: web::Data<GoogleAuthService>,
    pub token_service: web::Data<TokenService>,
    pub cookie_config: web::Data<CookieConfig>,
}

impl ServiceContext {
    pub fn new(
        store: Arc<dyn UserStore>,
        verifier: Arc<dyn IdTokenVerifier>,
        password: &PasswordConfig,
        jwt: &JwtConfig,
        cookie: CookieConfig,
    ) -> Self {
        Self {
            user_service: web::Data::new(UserService::new(store.clone(), password)),
            google_auth_service: web::Data::new(GoogleAuthService::new(verifier, store.clone())),
            token_service: web::Data::new(TokenService::new(jwt)),
            cookie_config: web::Data::new(cookie),
            store,
        }
    }

    /// 저장소 준비 작업(인덱스 생성 등)을 실행합니다.
    pub async fn initialize(&self) -> Result<(), AppError> {
        print_boxed_title("🔄 INITIALIZING AUTH SERVICES");

        print_step_start(1, "Preparing user store");
        print_sub_task(self.store.name(), "Creating indexes...");
        self.store.init().await?;
        print_sub_task(self.store.name(), "✓ Ready");
        print_step_complete(1, "User store ready", 1);

        print_step_start(2, "Registering services");
        for name in ["UserService", "GoogleAuthService", "TokenService"] {
            print_sub_task(name, "✓ Registered");
        }
        print_step_complete(2, "Services registered", 3);

        Ok(())
    }

    /// 서비스들을 actix 앱 데이터로 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.user_service.clone())
            .app_data(self.google_auth_service.clone())
            .app_data(self.token_service.clone())
            .app_data(self.cookie_config.clone());
    }
}
