//! Profile Entity Implementation
//!
//! 사용자당 하나씩 존재하는 프로필 문서와 그 하위 문서(경력, 소셜 링크)를 정의합니다.

use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::UserSummary;

/// 소셜 링크 묶음
///
/// 각 항목은 독립적으로 갱신됩니다. 요청에 없는 항목은 기존 값을 유지합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl SocialLinks {
    /// `(키, 값)` 쌍으로 순회
    pub fn entries(&self) -> [(&'static str, &Option<String>); 4] {
        [
            ("twitter", &self.twitter),
            ("instagram", &self.instagram),
            ("facebook", &self.facebook),
            ("github", &self.github),
        ]
    }

    /// `other`에 값이 있는 항목만 덮어씁니다.
    pub fn merge(&mut self, other: &SocialLinks) {
        if other.twitter.is_some() {
            self.twitter = other.twitter.clone();
        }
        if other.instagram.is_some() {
            self.instagram = other.instagram.clone();
        }
        if other.facebook.is_some() {
            self.facebook = other.facebook.clone();
        }
        if other.github.is_some() {
            self.github = other.github.clone();
        }
    }
}

/// 경력 하위 문서
///
/// 프로필의 `experience` 배열 안에서 자신의 `_id`로 식별됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 프로필 엔티티 (`profiles` 컬렉션)
///
/// `user` 필드는 사용자당 유일합니다(유니크 인덱스 + `user` 기준 upsert).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 소유자 참조
    pub user: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    /// 최신 항목이 앞에 오도록 유지됩니다.
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl Profile {
    /// 경력 항목의 위치를 id로 찾습니다.
    pub fn experience_index(&self, experience_id: &ObjectId) -> Option<usize> {
        self.experience.iter().position(|exp| &exp.id == experience_id)
    }
}

/// 프로필 생성/수정에 쓰이는 희소(sparse) 필드 집합
///
/// `None`인 필드는 "요청에 없음"을 뜻하며 기존 값을 지우지 않습니다.
/// null로 값을 지우는 의미는 없습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub skills: Option<Vec<String>>,
    pub education: Option<String>,
    pub social: SocialLinks,
}

impl ProfileFields {
    /// MongoDB `$set`에 넣을 문서를 만듭니다.
    ///
    /// 존재하는 키만 포함하며, 소셜 링크는 `social.twitter`처럼 점 표기법으로 넣어
    /// 요청에 없는 링크가 지워지지 않게 합니다.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();

        let scalars = [
            ("company", &self.company),
            ("website", &self.website),
            ("bio", &self.bio),
            ("location", &self.location),
            ("age", &self.age),
            ("gender", &self.gender),
            ("education", &self.education),
        ];
        for (key, value) in scalars {
            if let Some(value) = value {
                set.insert(key, value.clone());
            }
        }

        if let Some(skills) = &self.skills {
            set.insert("skills", skills.clone());
        }

        for (key, value) in self.social.entries() {
            if let Some(value) = value {
                set.insert(format!("social.{}", key), value.clone());
            }
        }

        set
    }

    /// 메모리 저장소에서 기존 프로필에 병합할 때 사용합니다.
    pub fn apply_to(&self, profile: &mut Profile) {
        fn assign(target: &mut Option<String>, value: &Option<String>) {
            if value.is_some() {
                *target = value.clone();
            }
        }

        assign(&mut profile.company, &self.company);
        assign(&mut profile.website, &self.website);
        assign(&mut profile.bio, &self.bio);
        assign(&mut profile.location, &self.location);
        assign(&mut profile.education, &self.education);

        if let Some(age) = &self.age {
            profile.age = age.clone();
        }
        if let Some(gender) = &self.gender {
            profile.gender = gender.clone();
        }
        if let Some(skills) = &self.skills {
            profile.skills = skills.clone();
        }

        profile.social.merge(&self.social);
    }

    /// 해당 사용자의 새 프로필을 만듭니다.
    pub fn to_new_profile(&self, user: ObjectId) -> Profile {
        let mut profile = Profile {
            id: ObjectId::new(),
            user,
            company: None,
            website: None,
            bio: None,
            location: None,
            age: String::new(),
            gender: String::new(),
            skills: Vec::new(),
            education: None,
            social: SocialLinks::default(),
            experience: Vec::new(),
        };
        self.apply_to(&mut profile);
        profile
    }
}

/// 소유자 정보가 채워진 프로필 조회 결과
///
/// 소유자 문서가 사라진 경우(`owner == None`)에도 프로필 자체는 반환됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileWithOwner {
    pub profile: Profile,
    pub owner: Option<UserSummary>,
}

/// 경력 하위 문서를 BSON으로 만들 때 쓰는 헬퍼
pub fn experience_document(experience: &Experience) -> Document {
    let mut document = doc! {
        "_id": experience.id,
        "title": &experience.title,
        "company": &experience.company,
        "from": experience.from,
    };
    if let Some(location) = &experience.location {
        document.insert("location", location.clone());
    }
    if let Some(to) = experience.to {
        document.insert("to", to);
    }
    if let Some(description) = &experience.description {
        document.insert("description", description.clone());
    }
    document
}
