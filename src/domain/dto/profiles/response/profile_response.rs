use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::profiles::{Experience, Profile, ProfileWithOwner, SocialLinks};
use crate::domain::entities::users::UserSummary;
use crate::utils::time_utils::to_utc;

/// 프로필의 `user` 필드
///
/// 조회 API는 소유자의 이름과 이메일을 채워서, 변경 API는 id만 돌려줍니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileOwner {
    User(OwnerResponse),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<UserSummary> for OwnerResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id.to_hex(),
            name: summary.name,
            email: summary.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Experience> for ExperienceResponse {
    fn from(experience: Experience) -> Self {
        Self {
            id: experience.id.to_hex(),
            title: experience.title,
            company: experience.company,
            location: experience.location,
            from: to_utc(experience.from),
            to: experience.to.map(to_utc),
            description: experience.description,
        }
    }
}

/// 프로필 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: ProfileOwner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub age: String,
    pub gender: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<ExperienceResponse>,
}

impl ProfileResponse {
    fn build(profile: Profile, user: ProfileOwner) -> Self {
        let Profile {
            id,
            company,
            website,
            bio,
            location,
            age,
            gender,
            skills,
            education,
            social,
            experience,
            ..
        } = profile;

        Self {
            id: id.to_hex(),
            user,
            company,
            website,
            bio,
            location,
            age,
            gender,
            skills,
            education,
            social,
            experience: experience.into_iter().map(ExperienceResponse::from).collect(),
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        let owner = ProfileOwner::Id(profile.user.to_hex());
        Self::build(profile, owner)
    }
}

impl From<ProfileWithOwner> for ProfileResponse {
    /// 소유자 문서가 없으면 id만 채웁니다.
    fn from(view: ProfileWithOwner) -> Self {
        let owner = match view.owner {
            Some(summary) => ProfileOwner::User(summary.into()),
            None => ProfileOwner::Id(view.profile.user.to_hex()),
        };
        Self::build(view.profile, owner)
    }
}
