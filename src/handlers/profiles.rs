//! # Profile HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/api/profile` | 필요 | 프로필 생성/수정 |
//! | `GET` | `/api/profile/me` | 필요 | 내 프로필 |
//! | `GET` | `/api/profile` | - | 전체 프로필 |
//! | `GET` | `/api/profile/user/{user_id}` | - | 사용자별 프로필 |
//! | `DELETE` | `/api/profile` | 필요 | 프로필과 계정 삭제 |
//! | `PUT` | `/api/profile/experience` | 필요 | 경력 추가 |
//! | `DELETE` | `/api/profile/experience/{exp_id}` | 필요 | 경력 삭제 |
//! | `GET` | `/api/profile/github/{username}` | - | GitHub 저장소 |
//!
//! 스코프는 선택적 인증으로 감싸고, 인증이 필요한 핸들러만
//! [`AuthenticatedUser`] 추출자를 받습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::profiles::{ExperienceRequest, UpsertProfileRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::github::GithubService;
use crate::services::profiles::ProfileService;

#[post("")]
pub async fn upsert_profile(
    profile_service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<UpsertProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let profile = profile_service
        .upsert_profile(&user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[get("/me")]
pub async fn get_my_profile(
    profile_service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = profile_service.get_own_profile(&user.object_id()?).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[get("")]
pub async fn list_profiles(
    profile_service: web::Data<ProfileService>,
) -> Result<HttpResponse, AppError> {
    let profiles = profile_service.list_profiles().await?;

    Ok(HttpResponse::Ok().json(profiles))
}

#[get("/user/{user_id}")]
pub async fn get_profile_by_user(
    profile_service: web::Data<ProfileService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = profile_service.get_profile_by_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[delete("")]
pub async fn delete_account(
    profile_service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    profile_service.delete_user_and_profile(&user.object_id()?).await?;

    Ok(HttpResponse::Ok().body("User deleted"))
}

#[put("/experience")]
pub async fn add_experience(
    profile_service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<ExperienceRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let profile = profile_service
        .add_experience(&user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[delete("/experience/{exp_id}")]
pub async fn remove_experience(
    profile_service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    exp_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = profile_service
        .remove_experience(&user.object_id()?, &exp_id)
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[get("/github/{username}")]
pub async fn github_repos(
    github_service: web::Data<GithubService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let repos = github_service.fetch_repos(&username).await?;

    Ok(HttpResponse::Ok().json(repos))
}
