//! 인증 관련 서비스
//!
//! JWT 발급/검증을 담당하는 [`TokenService`]를 제공합니다.

pub mod token_service;

pub use token_service::TokenService;
