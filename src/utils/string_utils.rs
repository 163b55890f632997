//! # 문자열 유틸리티
//!
//! 요청 DTO 정리에 쓰이는 공통 문자열 처리 함수들입니다.

use serde::Deserialize;
use validator::ValidationError;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 쉼표로 구분된 목록을 정리된 순서 있는 목록으로 변환
///
/// 각 항목의 앞뒤 공백을 제거하고 빈 항목은 버립니다. 입력 순서는 유지됩니다.
///
/// ```rust,ignore
/// assert_eq!(split_comma_list(" rust, go ,, sql "), vec!["rust", "go", "sql"]);
/// ```
pub fn split_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 공백만 있는 값을 거부하는 `validator` 커스텀 검증 함수
///
/// ```rust,ignore
/// #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
/// pub name: String,
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_valid_string(value) {
        Ok(())
    } else {
        Err(ValidationError::new("blank"))
    }
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열은 None으로, 나머지는 앞뒤 공백을 제거한
/// Some으로 변환합니다. 필드가 없을 수 있으므로 `#[serde(default)]`와 함께 사용합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Request {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     company: Option<String>,
/// }
///
/// // {"company": "  Acme  "} → Some("Acme")
/// // {"company": ""} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 문자열 또는 숫자를 문자열로 받는 serde deserializer
///
/// 폼에서는 `"27"`, JSON 클라이언트에서는 `27`로 오는 필드(나이 등)에 사용합니다.
/// null은 빈 문자열이 되어 이후 검증 단계에서 누락으로 처리됩니다.
pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(StringOrNumber::Text(s)) => s.trim().to_string(),
        Some(StringOrNumber::Integer(n)) => n.to_string(),
        Some(StringOrNumber::Float(f)) => f.to_string(),
        None => String::new(),
    })
}
