//! 회원가입 요청 DTO
//!
//! `POST /api/users` 본문을 매핑합니다. 누락된 필드는 빈 문자열로 채워져
//! 검증 단계에서 필드 단위 에러로 보고됩니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::validate_not_blank;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    /// 표시 이름
    #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
    pub name: String,

    /// 로그인 이메일 (저장 전에 소문자로 정규화)
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

impl RegisterRequest {
    /// 앞뒤 공백을 제거하고 이메일을 소문자로 바꾼 사본
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fail_validation() {
        let request: RegisterRequest = serde_json::from_str("{}").unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_short_password_rejected() {
        let request = RegisterRequest {
            name: "Kim".into(),
            email: "kim@example.com".into(),
            password: "12345".into(),
        };
        let errors = request.validate().unwrap_err();

        assert_eq!(errors.field_errors().len(), 1);
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_normalized_lowercases_email() {
        let request = RegisterRequest {
            name: "  Kim ".into(),
            email: " Kim@Example.COM ".into(),
            password: "secret1".into(),
        };
        let normalized = request.normalized();

        assert_eq!(normalized.name, "Kim");
        assert_eq!(normalized.email, "kim@example.com");
        assert!(normalized.validate().is_ok());
    }
}
