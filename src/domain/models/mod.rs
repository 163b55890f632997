//! # Domain Models Module
//!
//! 저장되지 않는 도메인 값 객체를 정의합니다.
//!
//! - [`auth`]: 요청에 부착되는 인증 컨텍스트와 인증 모드
//! - [`token`]: JWT 클레임

pub mod auth;
pub mod token;
