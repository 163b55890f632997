//! # 프로필 리포지토리 구현
//!
//! `profiles` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! - 생성/수정은 `user` 기준 단일 `findOneAndUpdate(upsert)`로 처리
//! - 조회 시 소유자 정보는 `$lookup`으로 채움
//! - 경력 추가/삭제는 `$push`(`$position: 0`)와 `$pull`

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::profiles::{
    experience_document, Experience, Profile, ProfileFields, ProfileWithOwner,
};
use crate::domain::entities::users::UserSummary;
use crate::errors::AppError;
use crate::repositories::{db_error, is_duplicate_key};
use crate::repositories::users::MongoUserRepository;

/// 프로필 저장소 인터페이스
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// 사용자의 프로필 조회 (소유자 정보 없음)
    async fn find_by_user(&self, user_id: &ObjectId) -> Result<Option<Profile>, AppError>;

    /// 사용자의 프로필을 소유자 요약과 함께 조회
    async fn find_with_owner(&self, user_id: &ObjectId) -> Result<Option<ProfileWithOwner>, AppError>;

    /// 모든 프로필을 소유자 요약과 함께 조회
    async fn find_all_with_owners(&self) -> Result<Vec<ProfileWithOwner>, AppError>;

    /// 프로필이 있으면 병합 수정, 없으면 생성
    ///
    /// `fields`에 없는 값은 건드리지 않습니다.
    async fn upsert(&self, user_id: &ObjectId, fields: &ProfileFields) -> Result<Profile, AppError>;

    /// 경력 항목을 맨 앞에 추가. 프로필이 없으면 `None`
    async fn push_experience(
        &self,
        user_id: &ObjectId,
        experience: &Experience,
    ) -> Result<Option<Profile>, AppError>;

    /// id가 일치하는 경력 항목 하나를 제거
    ///
    /// 프로필이 없거나 일치하는 항목이 없으면 `None`
    async fn pull_experience(
        &self,
        user_id: &ObjectId,
        experience_id: &ObjectId,
    ) -> Result<Option<Profile>, AppError>;

    /// 사용자의 프로필 삭제. 삭제된 문서가 있으면 `true`
    async fn delete_by_user(&self, user_id: &ObjectId) -> Result<bool, AppError>;
}

/// MongoDB 기반 프로필 리포지토리
///
/// ## 인덱스
/// - `user` (unique)
#[derive(Clone)]
pub struct MongoProfileRepository {
    collection: Collection<Profile>,
}

impl MongoProfileRepository {
    pub const COLLECTION: &'static str = "profiles";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Profile>(Self::COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(user_index)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    fn after_update() -> FindOneAndUpdateOptions {
        FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build()
    }

    /// `$match` 뒤에 소유자 `$lookup`을 붙인 집계 파이프라인
    fn owner_pipeline(filter: Document) -> Vec<Document> {
        vec![
            doc! { "$match": filter },
            doc! {
                "$lookup": {
                    "from": MongoUserRepository::COLLECTION,
                    "localField": "user",
                    "foreignField": "_id",
                    "as": "owner",
                }
            },
            doc! { "$unwind": { "path": "$owner", "preserveNullAndEmptyArrays": true } },
        ]
    }

    async fn aggregate_with_owners(&self, filter: Document) -> Result<Vec<ProfileWithOwner>, AppError> {
        let documents: Vec<Document> = self.collection
            .aggregate(Self::owner_pipeline(filter))
            .await
            .map_err(db_error)?
            .try_collect()
            .await
            .map_err(db_error)?;

        documents.into_iter().map(profile_with_owner).collect()
    }

    async fn upsert_once(&self, user_id: &ObjectId, fields: &ProfileFields) -> mongodb::error::Result<Option<Profile>> {
        let set = fields.to_set_document();

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "user": *user_id }, doc! { "$set": set })
            .with_options(options)
            .await
    }
}

/// `$lookup` 결과 문서를 프로필과 소유자 요약으로 분리합니다.
fn profile_with_owner(mut document: Document) -> Result<ProfileWithOwner, AppError> {
    let owner = match document.remove("owner") {
        Some(mongodb::bson::Bson::Document(owner)) => Some(
            from_document::<UserSummary>(owner)
                .map_err(|e| AppError::DatabaseError(e.to_string()))?,
        ),
        _ => None,
    };
    let profile = from_document::<Profile>(document)
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    Ok(ProfileWithOwner { profile, owner })
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn find_by_user(&self, user_id: &ObjectId) -> Result<Option<Profile>, AppError> {
        self.collection
            .find_one(doc! { "user": *user_id })
            .await
            .map_err(db_error)
    }

    async fn find_with_owner(&self, user_id: &ObjectId) -> Result<Option<ProfileWithOwner>, AppError> {
        let mut found = self.aggregate_with_owners(doc! { "user": *user_id }).await?;
        Ok(found.pop())
    }

    async fn find_all_with_owners(&self) -> Result<Vec<ProfileWithOwner>, AppError> {
        self.aggregate_with_owners(doc! {}).await
    }

    async fn upsert(&self, user_id: &ObjectId, fields: &ProfileFields) -> Result<Profile, AppError> {
        // 동시 upsert가 유니크 인덱스에 걸리면 한 번 더 시도하면 기존 문서 갱신으로 끝남
        let result = match self.upsert_once(user_id, fields).await {
            Err(e) if is_duplicate_key(&e) => self.upsert_once(user_id, fields).await,
            other => other,
        };

        result
            .map_err(db_error)?
            .ok_or_else(|| AppError::InternalError("upsert returned no document".to_string()))
    }

    async fn push_experience(
        &self,
        user_id: &ObjectId,
        experience: &Experience,
    ) -> Result<Option<Profile>, AppError> {
        let update = doc! {
            "$push": {
                "experience": {
                    "$each": [experience_document(experience)],
                    "$position": 0,
                }
            }
        };

        self.collection
            .find_one_and_update(doc! { "user": *user_id }, update)
            .with_options(Self::after_update())
            .await
            .map_err(db_error)
    }

    async fn pull_experience(
        &self,
        user_id: &ObjectId,
        experience_id: &ObjectId,
    ) -> Result<Option<Profile>, AppError> {
        let filter = doc! { "user": *user_id, "experience._id": *experience_id };
        let update = doc! { "$pull": { "experience": { "_id": *experience_id } } };

        self.collection
            .find_one_and_update(filter, update)
            .with_options(Self::after_update())
            .await
            .map_err(db_error)
    }

    async fn delete_by_user(&self, user_id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection
            .delete_one(doc! { "user": *user_id })
            .await
            .map_err(db_error)?;

        Ok(result.deleted_count > 0)
    }
}
