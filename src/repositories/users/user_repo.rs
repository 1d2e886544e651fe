//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **컬렉션**: `users`
//! - **유일성**: `email` 유니크 인덱스(`email_unique`)가 중복 가입의 유일한 판단 근거
//! - **문서 형태**: [`UserDocument`] (`name`, `email`, `password`, `role`, `isOAuthUser`)

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    domain::entities::users::user::{NewUser, User, UserDocument},
    errors::AppError,
    repositories::users::user_store::UserStore,
};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류, 손상된 문서
/// - **DuplicateAccount**: 유니크 인덱스 위반 (동시 가입 경쟁 포함)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(&database);
/// repo.init().await?;
///
/// let created = repo.insert(NewUser::local(name, email, role, hash)).await?;
/// let found = repo.find_by_email(&created.email).await?;
/// ```
pub struct UserRepository {
    collection: Collection<UserDocument>,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<UserDocument>(Self::COLLECTION),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// `email` 필드에 유니크 인덱스를 만듭니다. 이미 같은 정의의 인덱스가 있으면 아무 일도 일어나지 않습니다.
    /// 기존 데이터에 중복 이메일이 있으면 생성에 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    fn name(&self) -> &str {
        "mongodb"
    }

    async fn init(&self) -> Result<(), AppError> {
        self.create_indexes().await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let document = self
            .collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        document.map(User::try_from).transpose()
    }

    async fn insert(&self, user: NewUser) -> Result<User, AppError> {
        let document = UserDocument::from(&user);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::DuplicateAccount(user.email.clone())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!("unexpected inserted id: {}", result.inserted_id))
        })?;

        Ok(user.with_id(id))
    }
}

/// 유니크 인덱스 위반 여부
fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}
