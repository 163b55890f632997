//! 날짜/시간 변환 유틸리티
//!
//! 저장소에는 BSON `DateTime`을, API 응답에는 RFC 3339 문자열(`chrono`)을 사용합니다.

use chrono::{DateTime as ChronoDateTime, NaiveDate, Utc};
use mongodb::bson::DateTime;

/// BSON `DateTime`을 `chrono::DateTime<Utc>`로 변환합니다.
///
/// 표현 범위를 벗어나는 값은 UNIX epoch로 대체됩니다.
pub fn to_utc(value: DateTime) -> ChronoDateTime<Utc> {
    ChronoDateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// 요청으로 들어온 날짜 문자열을 BSON `DateTime`으로 파싱합니다.
///
/// 허용 형식:
/// - RFC 3339 (`2021-03-01T09:00:00Z`, `2021-03-01T09:00:00+09:00`)
/// - 날짜만 (`2021-03-01`, UTC 자정으로 해석)
pub fn parse_date(value: &str) -> Option<DateTime> {
    let value = value.trim();

    if let Ok(parsed) = ChronoDateTime::parse_from_rfc3339(value) {
        return Some(DateTime::from_millis(parsed.timestamp_millis()));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_millis(naive.and_utc().timestamp_millis()))
}
