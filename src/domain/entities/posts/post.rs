//! Post Entity Implementation
//!
//! 게시글 문서와 그 안에 포함되는 좋아요, 댓글 하위 문서를 정의합니다.
//! 작성자의 `name`/`avatar`는 작성 시점 값이 복사되어 이후 변경되지 않습니다.

use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 좋아요 하위 문서
///
/// 한 게시글 안에서 같은 `user`는 최대 한 번만 나타납니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub user: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

impl Like {
    pub fn from_user(user: &User) -> Self {
        Self {
            user: user.id,
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }

    pub fn to_document(&self) -> Document {
        doc! {
            "user": self.user,
            "name": &self.name,
            "avatar": &self.avatar,
        }
    }
}

/// 댓글 하위 문서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub text: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub date: DateTime,
}

impl Comment {
    /// 작성자 정보를 복사해 새 댓글을 만듭니다.
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: ObjectId::new(),
            user: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: DateTime::now(),
        }
    }

    pub fn to_document(&self) -> Document {
        doc! {
            "_id": self.id,
            "user": self.user,
            "text": &self.text,
            "name": &self.name,
            "avatar": &self.avatar,
            "date": self.date,
        }
    }
}

/// 게시글 엔티티 (`posts` 컬렉션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 작성자 참조
    pub user: ObjectId,
    pub text: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub date: DateTime,
    /// 최신 좋아요가 앞
    #[serde(default)]
    pub likes: Vec<Like>,
    /// 작성 순서대로 뒤에 추가
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// 작성자 정보를 복사해 새 게시글을 만듭니다.
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: ObjectId::new(),
            user: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: DateTime::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        &self.user == user_id
    }

    pub fn is_liked_by(&self, user_id: &ObjectId) -> bool {
        self.likes.iter().any(|like| &like.user == user_id)
    }

    pub fn find_comment(&self, comment_id: &ObjectId) -> Option<&Comment> {
        self.comments.iter().find(|comment| &comment.id == comment_id)
    }
}
