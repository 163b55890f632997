//! # 프로필 서비스 구현
//!
//! 사용자당 하나인 프로필의 생성/수정(upsert), 조회, 경력 관리, 계정 삭제를 담당합니다.
//!
//! 요청 검증은 핸들러에서 끝난 상태로 들어온다고 가정합니다. 날짜 파싱처럼
//! 변환 과정에서만 알 수 있는 오류는 여기서 `ValidationError`로 돌려줍니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::profiles::{ExperienceRequest, ProfileResponse, UpsertProfileRequest};
use crate::errors::AppError;
use crate::repositories::profiles::ProfileRepository;
use crate::repositories::users::UserRepository;

const NO_PROFILE: &str = "There is no profile for this user";

/// 프로필 비즈니스 로직 서비스
pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    users: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { profiles, users }
    }

    fn no_profile() -> AppError {
        AppError::NotFound(NO_PROFILE.to_string())
    }

    /// 프로필 생성 또는 병합 수정
    ///
    /// 요청에 없는 선택 필드와 소셜 링크는 기존 값을 유지합니다.
    pub async fn upsert_profile(
        &self,
        user_id: &ObjectId,
        request: UpsertProfileRequest,
    ) -> Result<ProfileResponse, AppError> {
        let fields = request.into_fields();
        let profile = self.profiles.upsert(user_id, &fields).await?;

        log::info!("프로필 저장: user={}", user_id.to_hex());
        Ok(ProfileResponse::from(profile))
    }

    /// 로그인 사용자의 프로필 (소유자 정보 포함)
    pub async fn get_own_profile(&self, user_id: &ObjectId) -> Result<ProfileResponse, AppError> {
        self.profiles
            .find_with_owner(user_id)
            .await?
            .map(ProfileResponse::from)
            .ok_or_else(Self::no_profile)
    }

    /// 경로 파라미터로 받은 사용자 id의 프로필
    ///
    /// id 형식이 잘못된 경우도 프로필 없음으로 처리합니다.
    pub async fn get_profile_by_user(&self, user_id: &str) -> Result<ProfileResponse, AppError> {
        let user_id = ObjectId::parse_str(user_id).map_err(|_| Self::no_profile())?;
        self.get_own_profile(&user_id).await
    }

    /// 전체 프로필 목록. 없으면 빈 목록
    pub async fn list_profiles(&self) -> Result<Vec<ProfileResponse>, AppError> {
        let profiles = self.profiles.find_all_with_owners().await?;
        Ok(profiles.into_iter().map(ProfileResponse::from).collect())
    }

    /// 경력 항목을 맨 앞에 추가
    pub async fn add_experience(
        &self,
        user_id: &ObjectId,
        request: ExperienceRequest,
    ) -> Result<ProfileResponse, AppError> {
        let experience = request.into_experience()?;

        self.profiles
            .push_experience(user_id, &experience)
            .await?
            .map(ProfileResponse::from)
            .ok_or_else(Self::no_profile)
    }

    /// id가 일치하는 경력 항목 하나만 제거
    pub async fn remove_experience(
        &self,
        user_id: &ObjectId,
        experience_id: &str,
    ) -> Result<ProfileResponse, AppError> {
        let not_found = || AppError::NotFound("Experience not found".to_string());
        let experience_id = ObjectId::parse_str(experience_id).map_err(|_| not_found())?;

        if let Some(profile) = self.profiles.pull_experience(user_id, &experience_id).await? {
            return Ok(ProfileResponse::from(profile));
        }

        // 프로필이 없는 경우와 항목이 없는 경우를 구분
        match self.profiles.find_by_user(user_id).await? {
            Some(_) => Err(not_found()),
            None => Err(Self::no_profile()),
        }
    }

    /// 프로필과 사용자 계정 삭제
    ///
    /// 두 단계는 원자적이지 않습니다. 프로필 삭제 후 사용자 삭제가 실패하면
    /// 프로필 없는 사용자가 남습니다. 게시글은 삭제하지 않습니다.
    pub async fn delete_user_and_profile(&self, user_id: &ObjectId) -> Result<(), AppError> {
        let removed_profile = self.profiles.delete_by_user(user_id).await?;

        if let Err(e) = self.users.delete(user_id).await {
            log::error!(
                "사용자 삭제 실패 (프로필 삭제됨={}): user={} - {}",
                removed_profile,
                user_id.to_hex(),
                e
            );
            return Err(e);
        }

        log::info!("사용자 삭제: user={}", user_id.to_hex());
        Ok(())
    }
}
