//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 특징
//!
//! - **이메일 유니크 인덱스**: 중복 가입을 저장소 수준에서 차단
//! - **trait 기반 주입**: 서비스는 [`UserRepository`] trait 객체만 사용

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::repositories::{db_error, is_duplicate_key};

/// 사용자 저장소 인터페이스
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    /// 이메일 주소로 사용자 조회
    ///
    /// 이메일은 저장 시 소문자로 정규화되어 있으므로 호출자도 정규화된 값을 넘겨야 합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자 생성
    ///
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 사용자 삭제. 삭제된 문서가 있으면 `true`
    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## 인덱스
/// - `email` (unique)
/// - `created_at` (desc)
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다. 이미 중복 이메일이 있는
    /// 컬렉션에서는 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(db_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(db_error)
    }

    async fn create(&self, user: User) -> Result<User, AppError> {
        match self.collection.insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(e) if is_duplicate_key(&e) => {
                Err(AppError::ConflictError("User already exists".to_string()))
            }
            Err(e) => Err(db_error(e)),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(db_error)?;

        Ok(result.deleted_count > 0)
    }
}
