//! # Post HTTP Handlers
//!
//! `/api/post` 스코프 전체가 인증 필수입니다.
//!
//! | 메서드 | 경로 | 응답 |
//! |--------|------|------|
//! | `POST` | `/api/post` | 작성된 게시글 |
//! | `GET` | `/api/post` | 최신순 목록 |
//! | `GET` | `/api/post/{post_id}` | 게시글 |
//! | `DELETE` | `/api/post/{post_id}` | `"Post deleted"` |
//! | `PUT` | `/api/post/like/{post_id}` | 좋아요 목록 |
//! | `DELETE` | `/api/post/like/{post_id}` | 좋아요 목록 |
//! | `PUT` | `/api/post/comment/{post_id}` | 게시글 |
//! | `DELETE` | `/api/post/comment/{post_id}/{comment_id}` | 게시글 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::posts::{CommentRequest, PostRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::posts::PostService;

#[post("")]
pub async fn create_post(
    post_service: web::Data<PostService>,
    user: AuthenticatedUser,
    payload: web::Json<PostRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let post = post_service
        .create_post(&user.object_id()?, payload.into_inner().text)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

#[get("")]
pub async fn list_posts(
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let posts = post_service.list_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

// 아래 두 경로는 `/like/...`, `/comment/...`보다 나중에 등록해야 합니다.
#[get("/{post_id}")]
pub async fn get_post(
    post_service: web::Data<PostService>,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = post_service.get_post(&post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

#[delete("/{post_id}")]
pub async fn delete_post(
    post_service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    post_service.delete_post(&user.object_id()?, &post_id).await?;

    Ok(HttpResponse::Ok().body("Post deleted"))
}

#[put("/like/{post_id}")]
pub async fn like_post(
    post_service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let likes = post_service.like_post(&user.object_id()?, &post_id).await?;

    Ok(HttpResponse::Ok().json(likes))
}

#[delete("/like/{post_id}")]
pub async fn unlike_post(
    post_service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let likes = post_service.unlike_post(&user.object_id()?, &post_id).await?;

    Ok(HttpResponse::Ok().json(likes))
}

#[put("/comment/{post_id}")]
pub async fn add_comment(
    post_service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
    payload: web::Json<CommentRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let post = post_service
        .add_comment(&user.object_id()?, &post_id, payload.into_inner().text)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

#[delete("/comment/{post_id}/{comment_id}")]
pub async fn remove_comment(
    post_service: web::Data<PostService>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (post_id, comment_id) = path.into_inner();
    let post = post_service
        .remove_comment(&user.object_id()?, &post_id, &comment_id)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}
