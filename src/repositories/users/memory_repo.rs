//! 메모리 기반 사용자 저장소
//!
//! MongoDB 없이 서비스를 띄우거나 테스트할 때 사용합니다 (`USER_STORE=memory`).
//! 이메일 중복 검사와 삽입이 하나의 쓰기 잠금 안에서 일어나므로
//! MongoDB 유니크 인덱스와 같은 보장을 제공합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    domain::entities::users::user::{NewUser, User},
    errors::AppError,
    repositories::users::user_store::UserStore,
};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> AppError {
    AppError::InternalError("user store lock poisoned".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn init(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;

        if users.contains_key(&user.email) {
            return Err(AppError::DuplicateAccount(user.email));
        }

        let stored = user.with_id(ObjectId::new());
        users.insert(stored.email.clone(), stored.clone());
        Ok(stored)
    }
}
