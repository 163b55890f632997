//! # 게시글 서비스 구현
//!
//! 게시글 작성/조회/삭제와 좋아요, 댓글을 담당합니다.
//!
//! 좋아요와 댓글 변경은 리포지토리의 원자적 push/pull로 처리합니다. 원자 연산이
//! 아무 문서도 바꾸지 못한 경우에만 다시 조회해서 "없음"과 "충돌"을 구분합니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::posts::{likes_response, LikeResponse, PostResponse};
use crate::domain::entities::posts::{Comment, Like, Post};
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::repositories::posts::PostRepository;
use crate::repositories::users::UserRepository;

const POST_NOT_FOUND: &str = "Post not found";
const NOT_AUTHORIZED: &str = "User not authorized";
const ALREADY_LIKED: &str = "Already liked";
const NOT_YET_LIKED: &str = "Post has not yet been liked";
const COMMENT_NOT_FOUND: &str = "Comment does not exist";

/// 게시글 비즈니스 로직 서비스
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    fn post_not_found() -> AppError {
        AppError::NotFound(POST_NOT_FOUND.to_string())
    }

    /// 형식이 잘못된 id도 게시글 없음으로 처리
    fn parse_post_id(post_id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(post_id).map_err(|_| Self::post_not_found())
    }

    async fn author(&self, user_id: &ObjectId) -> Result<User, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn find_post(&self, post_id: &ObjectId) -> Result<Post, AppError> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(Self::post_not_found)
    }

    /// 작성자의 현재 이름/아바타를 복사해 게시글 작성
    pub async fn create_post(&self, user_id: &ObjectId, text: String) -> Result<PostResponse, AppError> {
        let author = self.author(user_id).await?;
        let post = self.posts.create(Post::new(&author, text.trim().to_string())).await?;

        log::info!("게시글 작성: post={} user={}", post.id.to_hex(), user_id.to_hex());
        Ok(PostResponse::from(post))
    }

    /// 최신순 전체 목록
    pub async fn list_posts(&self) -> Result<Vec<PostResponse>, AppError> {
        let posts = self.posts.find_all_newest_first().await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn get_post(&self, post_id: &str) -> Result<PostResponse, AppError> {
        let post_id = Self::parse_post_id(post_id)?;
        Ok(PostResponse::from(self.find_post(&post_id).await?))
    }

    /// 작성자만 삭제할 수 있습니다.
    pub async fn delete_post(&self, user_id: &ObjectId, post_id: &str) -> Result<(), AppError> {
        let post_id = Self::parse_post_id(post_id)?;
        let post = self.find_post(&post_id).await?;

        if !post.is_owned_by(user_id) {
            log::warn!("게시글 삭제 거부: post={} user={}", post_id.to_hex(), user_id.to_hex());
            return Err(AppError::AuthorizationError(NOT_AUTHORIZED.to_string()));
        }

        if !self.posts.delete(&post_id).await? {
            return Err(Self::post_not_found());
        }

        log::info!("게시글 삭제: post={}", post_id.to_hex());
        Ok(())
    }

    /// 좋아요. 갱신된 좋아요 목록을 반환합니다.
    pub async fn like_post(&self, user_id: &ObjectId, post_id: &str) -> Result<Vec<LikeResponse>, AppError> {
        let post_id = Self::parse_post_id(post_id)?;
        let post = self.find_post(&post_id).await?;
        if post.is_liked_by(user_id) {
            return Err(AppError::ConflictError(ALREADY_LIKED.to_string()));
        }

        let liker = self.author(user_id).await?;
        match self.posts.push_like_if_absent(&post_id, &Like::from_user(&liker)).await? {
            Some(updated) => Ok(likes_response(updated.likes)),
            None => Err(self.missing_or(&post_id, ALREADY_LIKED).await),
        }
    }

    /// 좋아요 취소. 갱신된 좋아요 목록을 반환합니다.
    pub async fn unlike_post(&self, user_id: &ObjectId, post_id: &str) -> Result<Vec<LikeResponse>, AppError> {
        let post_id = Self::parse_post_id(post_id)?;
        let post = self.find_post(&post_id).await?;
        if !post.is_liked_by(user_id) {
            return Err(AppError::ConflictError(NOT_YET_LIKED.to_string()));
        }

        match self.posts.pull_like(&post_id, user_id).await? {
            Some(updated) => Ok(likes_response(updated.likes)),
            None => Err(self.missing_or(&post_id, NOT_YET_LIKED).await),
        }
    }

    /// 댓글 추가. 갱신된 게시글 전체를 반환합니다.
    pub async fn add_comment(
        &self,
        user_id: &ObjectId,
        post_id: &str,
        text: String,
    ) -> Result<PostResponse, AppError> {
        let post_id = Self::parse_post_id(post_id)?;
        let commenter = self.author(user_id).await?;
        let comment = Comment::new(&commenter, text.trim().to_string());

        self.posts
            .push_comment(&post_id, &comment)
            .await?
            .map(PostResponse::from)
            .ok_or_else(Self::post_not_found)
    }

    /// 댓글 작성자만 자신의 댓글을 삭제할 수 있습니다.
    pub async fn remove_comment(
        &self,
        user_id: &ObjectId,
        post_id: &str,
        comment_id: &str,
    ) -> Result<PostResponse, AppError> {
        let post_id = Self::parse_post_id(post_id)?;
        let comment_not_found = || AppError::NotFound(COMMENT_NOT_FOUND.to_string());
        let comment_id = ObjectId::parse_str(comment_id).map_err(|_| comment_not_found())?;

        let post = self.find_post(&post_id).await?;
        let comment = post.find_comment(&comment_id).ok_or_else(comment_not_found)?;

        if &comment.user != user_id {
            log::warn!("댓글 삭제 거부: comment={} user={}", comment_id.to_hex(), user_id.to_hex());
            return Err(AppError::AuthorizationError(NOT_AUTHORIZED.to_string()));
        }

        self.posts
            .pull_comment(&post_id, &comment_id)
            .await?
            .map(PostResponse::from)
            .ok_or_else(comment_not_found)
    }

    /// 원자 연산이 실패한 뒤 게시글이 사라졌는지, 조건이 바뀌었는지 판별
    async fn missing_or(&self, post_id: &ObjectId, conflict: &str) -> AppError {
        match self.posts.find_by_id(post_id).await {
            Ok(Some(_)) => AppError::ConflictError(conflict.to_string()),
            Ok(None) => Self::post_not_found(),
            Err(e) => e,
        }
    }
}
