//! 에러 처리 모듈
//!
//! [`errors::AppError`]와 관련 헬퍼를 재export 합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext, FieldError, json_error_handler};
