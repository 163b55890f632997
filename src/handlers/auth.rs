//! Authentication HTTP Handlers
//!
//! 로그인과 현재 사용자 조회를 처리합니다. JWT 기반의 상태 없는 인증입니다.
//!
//! - `POST /api/auth`: 이메일/비밀번호 로그인, 토큰 발급
//! - `GET /api/auth`: 토큰 주체의 사용자 정보 (비밀번호 제외)
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::LoginRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

#[get("")]
pub async fn current_user(
    user_service: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = user_service.current_user(&user.object_id()?).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[post("")]
pub async fn login(
    user_service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    log::debug!("로그인 시도: {}", payload.email);
    let response = user_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
