//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 문자열 정리, 목록 분리, serde 헬퍼
//! - [`time_utils`] - BSON/chrono 날짜 변환 및 파싱

pub mod string_utils;
pub mod time_utils;
