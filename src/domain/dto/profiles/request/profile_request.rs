//! 프로필 생성/수정 요청 DTO
//!
//! 폼 기반 클라이언트와 호환되도록 `skills`는 쉼표 구분 문자열,
//! 소셜 링크는 평평한(flat) 필드로 받습니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::profiles::{ProfileFields, SocialLinks};
use crate::utils::string_utils::{
    deserialize_optional_string, deserialize_string_or_number, split_comma_list,
    validate_not_blank,
};

/// `POST /api/profile` 요청 본문
///
/// 빈 문자열로 온 선택 필드는 "없음"으로 취급되어 기존 값을 덮어쓰지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpsertProfileRequest {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub website: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub bio: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,

    /// 문자열 또는 숫자
    #[serde(deserialize_with = "deserialize_string_or_number")]
    #[validate(custom(function = "validate_not_blank", message = "Please enter age"))]
    pub age: String,

    #[validate(custom(function = "validate_not_blank", message = "Please enter gender"))]
    pub gender: String,

    /// 쉼표로 구분된 기술 목록 (`"rust, go, sql"`)
    #[validate(custom(function = "validate_skills", message = "Please enter skills"))]
    pub skills: String,

    #[serde(deserialize_with = "deserialize_optional_string")]
    pub education: Option<String>,

    #[serde(deserialize_with = "deserialize_optional_string")]
    pub twitter: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub instagram: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub facebook: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub github: Option<String>,
}

fn validate_skills(skills: &str) -> Result<(), ValidationError> {
    if split_comma_list(skills).is_empty() {
        return Err(ValidationError::new("empty_skills"));
    }
    Ok(())
}

impl UpsertProfileRequest {
    /// 검증이 끝난 요청을 저장소용 희소 필드 집합으로 변환합니다.
    pub fn into_fields(self) -> ProfileFields {
        ProfileFields {
            company: self.company,
            website: self.website,
            bio: self.bio,
            location: self.location,
            age: Some(self.age.trim().to_string()),
            gender: Some(self.gender.trim().to_string()),
            skills: Some(split_comma_list(&self.skills)),
            education: self.education,
            social: SocialLinks {
                twitter: self.twitter,
                instagram: self.instagram,
                facebook: self.facebook,
                github: self.github,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_age_and_skill_list() {
        let request: UpsertProfileRequest = serde_json::from_str(
            r#"{"age": 27, "gender": "male", "skills": " rust, ,go ", "company": "", "github": "octo"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let fields = request.into_fields();
        assert_eq!(fields.age.as_deref(), Some("27"));
        assert_eq!(fields.skills, Some(vec!["rust".to_string(), "go".to_string()]));
        assert_eq!(fields.company, None);
        assert_eq!(fields.social.github.as_deref(), Some("octo"));
        assert_eq!(fields.social.twitter, None);
    }

    #[test]
    fn test_required_fields_reported() {
        let request: UpsertProfileRequest =
            serde_json::from_str(r#"{"skills": " , "}"#).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("gender"));
        assert!(fields.contains_key("skills"));
    }
}
