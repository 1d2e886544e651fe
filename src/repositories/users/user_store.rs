//! 사용자 저장소 추상화
//!
//! 서비스 계층은 구체 저장소 대신 [`UserStore`] 트레이트 객체에 의존합니다.
//! 운영에서는 MongoDB 기반 [`UserRepository`](super::user_repo::UserRepository),
//! 테스트와 로컬 실행에서는 [`InMemoryUserStore`](super::memory_repo::InMemoryUserStore)를 사용합니다.

use async_trait::async_trait;

use crate::domain::entities::users::user::{NewUser, User};
use crate::errors::AppError;

/// 사용자 레코드 저장소
///
/// 이메일 유일성은 저장소가 보장합니다. [`UserStore::insert`]는 별도의 사전 조회 없이
/// 유일성 제약 위반을 [`AppError::DuplicateAccount`]로 보고해야 합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 저장소 이름 (로그용)
    fn name(&self) -> &str;

    /// 인덱스 생성 등 저장소 준비 작업
    async fn init(&self) -> Result<(), AppError>;

    /// 이메일 주소로 사용자 조회
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자 저장
    ///
    /// * `Ok(User)` - 할당된 ID 를 포함한 저장된 사용자
    /// * `Err(AppError::DuplicateAccount)` - 같은 이메일의 사용자가 이미 있음
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    async fn insert(&self, user: NewUser) -> Result<User, AppError>;
}
