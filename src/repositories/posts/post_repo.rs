//! # 게시글 리포지토리 구현
//!
//! `posts` 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 좋아요와 댓글은 게시글 문서 안의 배열이며, 모든 변경은 단일 문서 원자 연산입니다.
//!
//! | 연산 | 필터 | 업데이트 |
//! |------|------|----------|
//! | 좋아요 | `_id`, `likes.user: {$ne: user}` | `$push` + `$position: 0` |
//! | 좋아요 취소 | `_id`, `likes.user: user` | `$pull` |
//! | 댓글 추가 | `_id` | `$push` (뒤에 추가) |
//! | 댓글 삭제 | `_id`, `comments._id` | `$pull` |

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::posts::{Comment, Like, Post};
use crate::errors::AppError;
use crate::repositories::db_error;

/// 게시글 저장소 인터페이스
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: Post) -> Result<Post, AppError>;

    /// 최신 게시글이 먼저 오도록 정렬된 전체 목록
    async fn find_all_newest_first(&self) -> Result<Vec<Post>, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, AppError>;

    /// 게시글 삭제. 삭제된 문서가 있으면 `true`
    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;

    /// 아직 좋아요하지 않은 사용자일 때만 맨 앞에 좋아요 추가
    ///
    /// 게시글이 없거나 이미 좋아요한 경우 `None`
    async fn push_like_if_absent(&self, post_id: &ObjectId, like: &Like) -> Result<Option<Post>, AppError>;

    /// 해당 사용자의 좋아요 제거
    ///
    /// 게시글이 없거나 좋아요하지 않은 경우 `None`
    async fn pull_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> Result<Option<Post>, AppError>;

    /// 댓글을 뒤에 추가. 게시글이 없으면 `None`
    async fn push_comment(&self, post_id: &ObjectId, comment: &Comment) -> Result<Option<Post>, AppError>;

    /// id가 일치하는 댓글 하나를 제거
    ///
    /// 게시글이나 댓글이 없으면 `None`
    async fn pull_comment(&self, post_id: &ObjectId, comment_id: &ObjectId) -> Result<Option<Post>, AppError>;
}

/// MongoDB 기반 게시글 리포지토리
///
/// ## 인덱스
/// - `date` (desc)
#[derive(Clone)]
pub struct MongoPostRepository {
    collection: Collection<Post>,
}

impl MongoPostRepository {
    pub const COLLECTION: &'static str = "posts";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Post>(Self::COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let date_index = IndexModel::builder()
            .keys(doc! { "date": -1 })
            .options(IndexOptions::builder()
                .name("date_desc".to_string())
                .build())
            .build();

        self.collection
            .create_index(date_index)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn update_one_returning(&self, filter: Document, update: Document) -> Result<Option<Post>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(filter, update)
            .with_options(options)
            .await
            .map_err(db_error)
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create(&self, post: Post) -> Result<Post, AppError> {
        self.collection
            .insert_one(&post)
            .await
            .map_err(db_error)?;

        Ok(post)
    }

    async fn find_all_newest_first(&self) -> Result<Vec<Post>, AppError> {
        self.collection
            .find(doc! {})
            .sort(doc! { "date": -1 })
            .await
            .map_err(db_error)?
            .try_collect()
            .await
            .map_err(db_error)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, AppError> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(db_error)
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(db_error)?;

        Ok(result.deleted_count > 0)
    }

    async fn push_like_if_absent(&self, post_id: &ObjectId, like: &Like) -> Result<Option<Post>, AppError> {
        let filter = doc! { "_id": *post_id, "likes.user": { "$ne": like.user } };
        let update = doc! {
            "$push": {
                "likes": {
                    "$each": [like.to_document()],
                    "$position": 0,
                }
            }
        };

        self.update_one_returning(filter, update).await
    }

    async fn pull_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> Result<Option<Post>, AppError> {
        let filter = doc! { "_id": *post_id, "likes.user": *user_id };
        let update = doc! { "$pull": { "likes": { "user": *user_id } } };

        self.update_one_returning(filter, update).await
    }

    async fn push_comment(&self, post_id: &ObjectId, comment: &Comment) -> Result<Option<Post>, AppError> {
        let update = doc! { "$push": { "comments": comment.to_document() } };

        self.update_one_returning(doc! { "_id": *post_id }, update).await
    }

    async fn pull_comment(&self, post_id: &ObjectId, comment_id: &ObjectId) -> Result<Option<Post>, AppError> {
        let filter = doc! { "_id": *post_id, "comments._id": *comment_id };
        let update = doc! { "$pull": { "comments": { "_id": *comment_id } } };

        self.update_one_returning(filter, update).await
    }
}
