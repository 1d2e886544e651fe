//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_store::UserStore) 트레이트와 두 구현체를 제공합니다.
//!
//! - [`UserRepository`](user_repo::UserRepository) - MongoDB `users` 컬렉션
//! - [`InMemoryUserStore`](memory_repo::InMemoryUserStore) - 프로세스 메모리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let user_repo: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod user_store;
pub mod user_repo;
pub mod memory_repo;

pub use user_store::UserStore;
pub use user_repo::UserRepository;
pub use memory_repo::InMemoryUserStore;
