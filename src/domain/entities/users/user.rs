//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 계정(비밀번호)과 OAuth 계정을 [`Account`] 합 타입으로 구분하여
//! "비밀번호 없는 로컬 계정" 같은 잘못된 조합을 타입 수준에서 막습니다.
//!
//! MongoDB 에 저장되는 실제 문서 형태는 [`UserDocument`]이며,
//! `name`, `email`, `password`, `role`, `isOAuthUser` 필드를 그대로 유지합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 신규 OAuth 계정에 부여되는 기본 역할
pub const DEFAULT_OAUTH_ROLE: &str = "Consumer";

/// 계정 인증 방식
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    /// 이메일/비밀번호 계정 (bcrypt 해시 보관)
    Local { password_hash: String },
    /// Google 로 가입한 계정 (비밀번호 없음)
    OAuth,
}

impl Account {
    pub fn is_oauth(&self) -> bool {
        matches!(self, Account::OAuth)
    }

    /// 로컬 계정인 경우 저장된 비밀번호 해시
    pub fn password_hash(&self) -> Option<&str> {
        match self {
            Account::Local { password_hash } => Some(password_hash),
            Account::OAuth => None,
        }
    }
}

/// 아직 저장되지 않은 사용자
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub account: Account,
}

impl NewUser {
    /// 새 로컬 사용자 (이메일/패스워드)
    pub fn local(name: String, email: String, role: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            role,
            account: Account::Local { password_hash },
        }
    }

    /// 새 OAuth 사용자, 역할은 항상 [`DEFAULT_OAUTH_ROLE`]
    pub fn oauth(name: String, email: String) -> Self {
        Self {
            name,
            email,
            role: DEFAULT_OAUTH_ROLE.to_string(),
            account: Account::OAuth,
        }
    }

    /// 저장소가 할당한 ID 를 붙여 엔티티로 만듭니다.
    pub fn with_id(self, id: ObjectId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            account: self.account,
        }
    }
}

/// 저장된 사용자 엔티티
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// 저장소가 할당한 ID
    pub id: ObjectId,
    pub name: String,
    /// 전체 사용자 중 유일
    pub email: String,
    pub role: String,
    pub account: Account,
}

impl User {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }

    pub fn is_oauth_user(&self) -> bool {
        self.account.is_oauth()
    }
}

/// `users` 컬렉션의 문서 형태
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    /// bcrypt 해시 (OAuth 사용자는 필드 자체가 없음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: String,
    #[serde(rename = "isOAuthUser", default)]
    pub is_oauth_user: bool,
}

impl From<&NewUser> for UserDocument {
    fn from(user: &NewUser) -> Self {
        Self {
            id: None,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.account.password_hash().map(str::to_string),
            role: user.role.clone(),
            is_oauth_user: user.account.is_oauth(),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = AppError;

    fn try_from(doc: UserDocument) -> Result<Self, Self::Error> {
        let id = doc.id.ok_or_else(|| {
            AppError::DatabaseError(format!("user document for {} has no _id", doc.email))
        })?;

        let account = if doc.is_oauth_user {
            Account::OAuth
        } else {
            match doc.password {
                Some(password_hash) if !password_hash.is_empty() => Account::Local { password_hash },
                _ => {
                    return Err(AppError::DatabaseError(format!(
                        "local user {} has no password hash",
                        id.to_hex()
                    )));
                }
            }
        };

        Ok(User {
            id,
            name: doc.name,
            email: doc.email,
            role: doc.role,
            account,
        })
    }
}
