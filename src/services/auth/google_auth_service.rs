//! # Google OAuth 로그인/가입 서비스
//!
//! 브라우저가 Google Identity Services 로 받은 ID 토큰 하나로 로그인과 가입을 모두 처리합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! received ─► verifying-credential ─┬─► (expired/invalid)         ─► 401
//!                                   ├─► (email_verified=false)    ─► 400
//!                                   └─► user-lookup ─┬─► existing ─► issue token, 200
//!                                                    └─► new      ─► create, issue token, 201
//! ```
//!
//! 같은 이메일로 이미 로컬 계정이 있으면 그 계정으로 로그인합니다.
//! 새 계정은 역할이 항상 `"Consumer"`이고 비밀번호가 없습니다.

use std::sync::Arc;

use crate::{
    domain::entities::users::user::{NewUser, User},
    errors::AppError,
    repositories::users::UserStore,
    services::auth::google_id_token::IdTokenVerifier,
};

/// Google 로그인 결과
#[derive(Debug, Clone)]
pub struct OAuthLogin {
    pub user: User,
    /// 이번 요청에서 계정이 새로 만들어졌는지 여부
    pub created: bool,
}

/// Google OAuth 인증 서비스
pub struct GoogleAuthService {
    verifier: Arc<dyn IdTokenVerifier>,
    user_repo: Arc<dyn UserStore>,
}

impl GoogleAuthService {
    pub fn new(verifier: Arc<dyn IdTokenVerifier>, user_repo: Arc<dyn UserStore>) -> Self {
        Self { verifier, user_repo }
    }

    /// ID 토큰으로 로그인하거나 새 계정을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 만료된 ID 토큰
    /// * `AppError::InvalidToken` - 서명/audience/형식 오류
    /// * `AppError::EmailNotVerified` - Google 이 이메일을 인증하지 않음 (계정 존재 여부와 무관)
    /// * `AppError::ExternalServiceError` - Google 공개키 조회 실패
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn authenticate(&self, id_token: &str) -> Result<OAuthLogin, AppError> {
        let identity = self.verifier.verify(id_token).await?;

        if !identity.email_verified {
            return Err(AppError::EmailNotVerified);
        }

        if let Some(user) = self.user_repo.find_by_email(&identity.email).await? {
            log::info!("Google 사용자 로그인: {}", identity.email);
            return Ok(OAuthLogin { user, created: false });
        }

        log::info!("새 Google 사용자 등록: {}", identity.email);
        let new_user = NewUser::oauth(identity.display_name(), identity.email.clone());

        match self.user_repo.insert(new_user).await {
            Ok(user) => Ok(OAuthLogin { user, created: true }),
            Err(AppError::DuplicateAccount(email)) => {
                // 동시 요청이 먼저 계정을 만든 경우 그 계정으로 로그인
                let user = self
                    .user_repo
                    .find_by_email(&email)
                    .await?
                    .ok_or_else(|| AppError::DatabaseError(format!("{} vanished after duplicate insert", email)))?;
                Ok(OAuthLogin { user, created: false })
            }
            Err(e) => Err(e),
        }
    }
}
