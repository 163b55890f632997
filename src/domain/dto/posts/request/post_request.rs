//! 게시글/댓글 작성 요청 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::validate_not_blank;

/// `POST /api/post` 요청 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PostRequest {
    #[validate(custom(function = "validate_not_blank", message = "text is required"))]
    pub text: String,
}

/// `PUT /api/post/comment/{post_id}` 요청 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CommentRequest {
    #[validate(custom(function = "validate_not_blank", message = "text is required"))]
    pub text: String,
}
