//! 공통 유틸리티 함수 모듈
//!
//! - [`display_terminal`] - 시작 배너와 초기화 단계 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! print_boxed_title("System Initialized");
//! ```

pub mod display_terminal;
