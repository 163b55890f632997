//! 소셜 네트워크 백엔드
//!
//! 회원가입과 JWT 로그인, 경력 항목을 가진 프로필, 좋아요와 댓글이 달리는
//! 게시글 피드를 제공하는 REST API 서버입니다.
//!
//! # Features
//!
//! - **사용자**: 회원가입(bcrypt, gravatar 아바타), 로그인, 현재 사용자 조회
//! - **JWT 인증**: HS256 액세스 토큰 기반 상태 없는 인증
//! - **프로필**: 사용자당 하나, 부분 갱신(upsert), 경력 추가/삭제, GitHub 저장소 조회
//! - **게시글**: 작성/삭제, 좋아요/취소, 댓글 작성/삭제
//! - **저장소**: MongoDB (운영) 또는 메모리 저장소 (개발/테스트)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (ServiceContainer가 조립)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← trait 기반 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB │ Memory │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use social_network_backend::core::ServiceContainer;
//! use social_network_backend::routes::configure_all_routes;
//!
//! let container = ServiceContainer::from_config().await?;
//! HttpServer::new(move || {
//!     let container = container.clone();
//!     App::new()
//!         .configure(move |cfg| container.configure(cfg))
//!         .configure(configure_all_routes)
//! });
//! ```

pub mod client;
pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
