//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB 를 주 저장소로 사용하며, 서비스 계층은 [`users::UserStore`] 트레이트에만 의존합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserStore;
//!
//! let user = store.find_by_email("user@example.com").await?;
//! ```

pub mod users;
