//! 사용자 계정 서비스
//!
//! 회원가입, 로그인, 현재 사용자 조회를 담당하는 [`UserService`]를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let token = user_service.register(request).await?;
//! let me = user_service.current_user(&user_id).await?;
//! ```

pub mod user_service;

pub use user_service::{gravatar_url, UserService};
