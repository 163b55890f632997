//! # API Client
//!
//! 이 백엔드를 호출하는 클라이언트 측 동작입니다. 현재는 회원가입만 제공합니다.

pub mod registration;

pub use registration::{Alert, AlertKind, RegistrationClient, RegistrationOutcome};
