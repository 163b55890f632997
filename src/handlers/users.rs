//! # User Registration HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users` | 회원가입, 토큰 발급 | 200 OK |
//!
//! 검증 실패와 이메일 중복은 모두 `400 {"errors": [...]}`로 응답합니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::RegisterRequest;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 회원가입
///
/// ```text
/// POST /api/users
/// {"name": "Kim", "email": "kim@example.com", "password": "secret1"}
///
/// 200 {"token": "eyJhbGciOi..."}
/// ```
#[post("")]
pub async fn register_user(
    user_service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
