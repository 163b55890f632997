//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 저장되는 문서 구조와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB 문서와 1:1 대응 (User, Profile, Post)
//! ├── DTOs          - 요청/응답 구조 (검증 포함)
//! └── Models        - 인증 컨텍스트, JWT 클레임
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 엔티티 관계
//!
//! ```text
//! User 1 ──── 0..1 Profile        (profile.user 참조, 유니크)
//! User 1 ──── 0..* Post           (post.user 참조 + name/avatar 스냅샷)
//! Post 1 ──── 0..* Like/Comment   (하위 문서 배열)
//! ```
//!
//! 엔티티는 `ObjectId`와 BSON `DateTime`을 사용하고, DTO 변환 시점에
//! 문자열 id와 `chrono::DateTime<Utc>`로 바뀝니다.

pub mod dto;
pub mod entities;
pub mod models;
