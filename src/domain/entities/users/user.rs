//! User Entity Implementation
//!
//! 회원가입으로 생성되는 사용자 엔티티입니다. `users` 컬렉션 문서와 1:1로 대응합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 사용자는 최대 하나의 프로필을 소유하며(프로필 쪽에서 참조), 게시글과 댓글,
/// 좋아요에는 작성 시점의 `name`/`avatar`가 복사됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (unique, 소문자로 정규화)
    pub email: String,
    /// bcrypt 해시. 어떤 응답에도 포함되지 않습니다.
    pub password: String,
    /// 프로필 이미지 URL (gravatar)
    pub avatar: String,
    /// 가입 시간
    pub created_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// `password_hash`는 이미 해시된 값이어야 합니다.
    pub fn new(name: String, email: String, password_hash: String, avatar: String) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            email,
            password: password_hash,
            avatar,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }

    /// 프로필 조회 시 채워 넣는 요약 정보
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// 참조 채우기(population)에 사용하는 사용자 요약
///
/// 프로필 조회 응답의 `user` 필드에 들어가는 `name`과 `email`만 담습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
}
