//! 인증 요청관련 DTO
//!
//! `POST /api/auth` 로그인 요청을 매핑합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::validate_not_blank;

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank", message = "Password is required"))]
    pub password: String,
}
