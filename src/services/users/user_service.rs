//! # 사용자 서비스
//!
//! 로컬 계정의 가입과 비밀번호 검증을 담당합니다.
//!
//! ## 보안 기능
//!
//! - **bcrypt 해싱**: 설정된 work factor(기본 10)로 해싱, 솔트는 bcrypt 가 생성
//! - **계정 열거 방지**: 없는 이메일, OAuth 전용 계정, 틀린 비밀번호 모두 같은 에러
//! - **중복 가입 방지**: 저장소의 이메일 유일성 제약에 위임

use std::sync::Arc;

use crate::{
    config::PasswordConfig,
    domain::{
        dto::users::request::SignupRequest,
        entities::users::user::{NewUser, User},
    },
    errors::AppError,
    repositories::users::UserStore,
};

/// 사용자 관리 서비스
pub struct UserService {
    user_repo: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserStore>, password: &PasswordConfig) -> Self {
        Self {
            user_repo,
            bcrypt_cost: password.bcrypt_cost,
        }
    }

    /// 로컬 계정 가입
    ///
    /// 비밀번호를 해싱한 뒤 `isOAuthUser=false` 계정으로 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateAccount` - 같은 이메일의 계정이 이미 있음
    /// * `AppError::HashingError` - bcrypt 해싱 실패
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn signup(&self, request: SignupRequest) -> Result<User, AppError> {
        let SignupRequest { name, email, role, password } = request;

        let hash_start = std::time::Instant::now();
        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = self
            .user_repo
            .insert(NewUser::local(name, email, role, password_hash))
            .await?;

        log::info!("새 로컬 사용자 가입: {} ({})", user.email, user.id_string());
        Ok(user)
    }

    /// 이메일/비밀번호 검증
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 계정 없음, OAuth 전용 계정, 비밀번호 불일치
    /// * `AppError::HashingError` - 저장된 해시가 손상됨
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // OAuth 계정은 비밀번호가 없으므로 로컬 로그인 불가
        let password_hash = match user.account.password_hash() {
            Some(hash) => hash.to_string(),
            None => return Err(AppError::InvalidCredentials),
        };

        let verify_start = std::time::Instant::now();
        let is_valid = verify_password_hash(password.to_string(), password_hash).await?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}

/// bcrypt 는 CPU 를 오래 쓰므로 블로킹 스레드 풀에서 실행합니다.
async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    actix_web::web::block(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(format!("해싱 작업 실행 실패: {}", e)))?
        .map_err(|e| AppError::HashingError(format!("비밀번호 해싱 실패: {}", e)))
}

async fn verify_password_hash(password: String, hash: String) -> Result<bool, AppError> {
    actix_web::web::block(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("검증 작업 실행 실패: {}", e)))?
        .map_err(|e| AppError::HashingError(format!("비밀번호 검증 실패: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::Account;
    use crate::repositories::users::InMemoryUserStore;

    fn service(store: Arc<InMemoryUserStore>) -> UserService {
        UserService::new(store, &PasswordConfig { bcrypt_cost: 4 })
    }

    fn signup_request(email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: "A".to_string(),
            email: email.to_string(),
            role: "Consumer".to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_signup_twice_keeps_one_record() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service(store.clone());

        service.signup(signup_request("a@x.com", "p1")).await.unwrap();
        let err = service.signup(signup_request("a@x.com", "p1")).await.unwrap_err();

        assert_eq!(err.to_string(), "User with email a@x.com already exists");
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_stored_password_is_never_plaintext() {
        let store = Arc::new(InMemoryUserStore::new());
        let user = service(store).signup(signup_request("a@x.com", "p1")).await.unwrap();

        match &user.account {
            Account::Local { password_hash } => {
                assert_ne!(password_hash, "p1");
                assert!(bcrypt::verify("p1", password_hash).unwrap());
            }
            Account::OAuth => panic!("signup must create a local account"),
        }
        assert!(!user.is_oauth_user());
    }

    #[actix_web::test]
    async fn test_verify_password_outcomes_share_error() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service(store.clone());
        service.signup(signup_request("a@x.com", "p1")).await.unwrap();
        store
            .insert(NewUser::oauth("G".into(), "g@gmail.com".into()))
            .await
            .unwrap();

        assert_eq!(service.verify_password("a@x.com", "p1").await.unwrap().email, "a@x.com");

        let wrong = service.verify_password("a@x.com", "nope").await.unwrap_err();
        let missing = service.verify_password("ghost@x.com", "p1").await.unwrap_err();
        let oauth_only = service.verify_password("g@gmail.com", "p1").await.unwrap_err();

        assert!(matches!(wrong, AppError::InvalidCredentials));
        assert_eq!(wrong.to_string(), missing.to_string());
        assert_eq!(wrong.to_string(), oauth_only.to_string());
    }

    #[actix_web::test]
    async fn test_concurrent_identical_signups_store_one_record() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = Arc::new(service(store.clone()));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let service = service.clone();
                actix_web::rt::spawn(async move { service.signup(signup_request("a@x.com", "p1")).await })
            })
            .collect();

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(AppError::DuplicateAccount(email)) if email == "a@x.com")));
        assert_eq!(store.len(), 1);
    }
}
