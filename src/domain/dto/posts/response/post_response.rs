use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::posts::{Comment, Like, Post};
use crate::utils::time_utils::to_utc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub user: String,
    pub name: String,
    pub avatar: String,
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            user: like.user.to_hex(),
            name: like.name,
            avatar: like.avatar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_hex(),
            user: comment.user.to_hex(),
            text: comment.text,
            name: comment.name,
            avatar: comment.avatar,
            date: to_utc(comment.date),
        }
    }
}

/// 게시글 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
    pub likes: Vec<LikeResponse>,
    pub comments: Vec<CommentResponse>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_hex(),
            user: post.user.to_hex(),
            text: post.text,
            name: post.name,
            avatar: post.avatar,
            date: to_utc(post.date),
            likes: likes_response(post.likes),
            comments: post.comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}

/// 좋아요/취소 API는 좋아요 목록만 반환합니다.
pub fn likes_response(likes: Vec<Like>) -> Vec<LikeResponse> {
    likes.into_iter().map(LikeResponse::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::User;

    #[test]
    fn test_post_response_uses_hex_ids() {
        let user = User::new("Park".into(), "park@example.com".into(), "hash".into(), "avatar".into());
        let mut post = Post::new(&user, "hello".into());
        post.likes.push(Like::from_user(&user));
        let post_id = post.id.to_hex();

        let json = serde_json::to_value(PostResponse::from(post)).unwrap();

        assert_eq!(json["_id"], post_id);
        assert_eq!(json["user"], user.id_string());
        assert_eq!(json["likes"][0]["user"], user.id_string());
        assert_eq!(json["comments"].as_array().unwrap().len(), 0);
    }
}
