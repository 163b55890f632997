//! 경력 추가 요청 DTO
use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::domain::entities::profiles::Experience;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{deserialize_optional_string, validate_not_blank};
use crate::utils::time_utils::parse_date;

/// `PUT /api/profile/experience` 요청 본문
///
/// `from`/`to`는 RFC 3339 또는 `YYYY-MM-DD` 형식입니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ExperienceRequest {
    #[validate(custom(function = "validate_not_blank", message = "Please enter a title"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank", message = "Enter company name"))]
    pub company: String,

    #[validate(custom(function = "validate_not_blank", message = "Enter from (date)"))]
    pub from: String,

    #[serde(deserialize_with = "deserialize_optional_string")]
    pub to: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

impl ExperienceRequest {
    /// 새 id를 부여한 경력 하위 문서로 변환합니다.
    ///
    /// 날짜 형식이 잘못되면 해당 필드의 검증 에러를 반환합니다.
    pub fn into_experience(self) -> AppResult<Experience> {
        let from = parse_date(&self.from)
            .ok_or_else(|| AppError::validation("from", "Enter a valid from date"))?;
        let to = match self.to.as_deref() {
            Some(value) => Some(
                parse_date(value)
                    .ok_or_else(|| AppError::validation("to", "Enter a valid to date"))?,
            ),
            None => None,
        };

        Ok(Experience {
            id: ObjectId::new(),
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location,
            from,
            to,
            description: self.description,
        })
    }
}
