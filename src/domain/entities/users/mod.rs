//! Users Entity Module
//!
//! 사용자 도메인의 엔티티와 참조 채우기용 요약 타입을 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(name, email, password_hash, avatar);
//! ```

pub mod user;

pub use user::{User, UserSummary};
