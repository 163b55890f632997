//! # 메모리 저장소
//!
//! 세 리포지토리 trait을 모두 구현하는 프로세스 내 저장소입니다.
//! 테스트와 `DATA_STORE=memory` 실행에 사용합니다.
//!
//! 모든 컬렉션을 하나의 `RwLock` 뒤에 두어, 각 연산이 MongoDB의 단일 문서
//! 원자 연산과 같은 단위로 직렬화됩니다.
//!
//! ```rust,ignore
//! let store = Arc::new(MemoryStore::new());
//! let users: Arc<dyn UserRepository> = store.clone();
//! let posts: Arc<dyn PostRepository> = store;
//! ```

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::posts::{Comment, Like, Post};
use crate::domain::entities::profiles::{Experience, Profile, ProfileFields, ProfileWithOwner};
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::repositories::posts::PostRepository;
use crate::repositories::profiles::ProfileRepository;
use crate::repositories::users::UserRepository;

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    profiles: Vec<Profile>,
    posts: Vec<Post>,
}

impl Collections {
    fn with_owner(&self, profile: &Profile) -> ProfileWithOwner {
        let owner = self
            .users
            .iter()
            .find(|user| user.id == profile.user)
            .map(User::summary);

        ProfileWithOwner {
            profile: profile.clone(),
            owner,
        }
    }

    fn profile_mut(&mut self, user_id: &ObjectId) -> Option<&mut Profile> {
        self.profiles.iter_mut().find(|profile| &profile.user == user_id)
    }

    fn post_mut(&mut self, post_id: &ObjectId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|post| &post.id == post_id)
    }
}

/// 메모리 기반 저장소
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, AppError> {
        self.state
            .read()
            .map_err(|_| AppError::DatabaseError("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, AppError> {
        self.state
            .write()
            .map_err(|_| AppError::DatabaseError("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.read()?.users.iter().find(|user| &user.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?.users.iter().find(|user| user.email == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, AppError> {
        let mut state = self.write()?;
        if state.users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError("User already exists".to_string()));
        }
        state.users.push(user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut state = self.write()?;
        let before = state.users.len();
        state.users.retain(|user| &user.id != id);
        Ok(state.users.len() != before)
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_by_user(&self, user_id: &ObjectId) -> Result<Option<Profile>, AppError> {
        Ok(self.read()?.profiles.iter().find(|p| &p.user == user_id).cloned())
    }

    async fn find_with_owner(&self, user_id: &ObjectId) -> Result<Option<ProfileWithOwner>, AppError> {
        let state = self.read()?;
        Ok(state
            .profiles
            .iter()
            .find(|p| &p.user == user_id)
            .map(|profile| state.with_owner(profile)))
    }

    async fn find_all_with_owners(&self) -> Result<Vec<ProfileWithOwner>, AppError> {
        let state = self.read()?;
        Ok(state.profiles.iter().map(|profile| state.with_owner(profile)).collect())
    }

    async fn upsert(&self, user_id: &ObjectId, fields: &ProfileFields) -> Result<Profile, AppError> {
        let mut state = self.write()?;
        if let Some(profile) = state.profile_mut(user_id) {
            fields.apply_to(profile);
            return Ok(profile.clone());
        }

        let profile = fields.to_new_profile(*user_id);
        state.profiles.push(profile.clone());
        Ok(profile)
    }

    async fn push_experience(
        &self,
        user_id: &ObjectId,
        experience: &Experience,
    ) -> Result<Option<Profile>, AppError> {
        let mut state = self.write()?;
        Ok(state.profile_mut(user_id).map(|profile| {
            profile.experience.insert(0, experience.clone());
            profile.clone()
        }))
    }

    async fn pull_experience(
        &self,
        user_id: &ObjectId,
        experience_id: &ObjectId,
    ) -> Result<Option<Profile>, AppError> {
        let mut state = self.write()?;
        let Some(profile) = state.profile_mut(user_id) else {
            return Ok(None);
        };
        let Some(index) = profile.experience_index(experience_id) else {
            return Ok(None);
        };

        profile.experience.remove(index);
        Ok(Some(profile.clone()))
    }

    async fn delete_by_user(&self, user_id: &ObjectId) -> Result<bool, AppError> {
        let mut state = self.write()?;
        let before = state.profiles.len();
        state.profiles.retain(|profile| &profile.user != user_id);
        Ok(state.profiles.len() != before)
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn create(&self, post: Post) -> Result<Post, AppError> {
        self.write()?.posts.push(post.clone());
        Ok(post)
    }

    async fn find_all_newest_first(&self) -> Result<Vec<Post>, AppError> {
        let mut posts = self.read()?.posts.clone();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, AppError> {
        Ok(self.read()?.posts.iter().find(|post| &post.id == id).cloned())
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut state = self.write()?;
        let before = state.posts.len();
        state.posts.retain(|post| &post.id != id);
        Ok(state.posts.len() != before)
    }

    async fn push_like_if_absent(&self, post_id: &ObjectId, like: &Like) -> Result<Option<Post>, AppError> {
        let mut state = self.write()?;
        match state.post_mut(post_id) {
            Some(post) if !post.is_liked_by(&like.user) => {
                post.likes.insert(0, like.clone());
                Ok(Some(post.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn pull_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> Result<Option<Post>, AppError> {
        let mut state = self.write()?;
        match state.post_mut(post_id) {
            Some(post) if post.is_liked_by(user_id) => {
                post.likes.retain(|like| &like.user != user_id);
                Ok(Some(post.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn push_comment(&self, post_id: &ObjectId, comment: &Comment) -> Result<Option<Post>, AppError> {
        let mut state = self.write()?;
        Ok(state.post_mut(post_id).map(|post| {
            post.comments.push(comment.clone());
            post.clone()
        }))
    }

    async fn pull_comment(&self, post_id: &ObjectId, comment_id: &ObjectId) -> Result<Option<Post>, AppError> {
        let mut state = self.write()?;
        let Some(post) = state.post_mut(post_id) else {
            return Ok(None);
        };
        let Some(index) = post.comments.iter().position(|c| &c.id == comment_id) else {
            return Ok(None);
        };

        post.comments.remove(index);
        Ok(Some(post.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    fn user(name: &str) -> User {
        User::new(name.into(), format!("{}@example.com", name), "hash".into(), "avatar".into())
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let store = MemoryStore::new();
        UserRepository::create(&store, user("kim")).await.unwrap();

        match UserRepository::create(&store, user("kim")).await {
            Err(AppError::ConflictError(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_upsert_twice_keeps_single_profile() {
        let store = MemoryStore::new();
        let owner = user("lee");
        UserRepository::create(&store, owner.clone()).await.unwrap();

        let first = ProfileFields {
            age: Some("20".into()),
            gender: Some("male".into()),
            skills: Some(vec!["rust".into()]),
            bio: Some("first".into()),
            ..ProfileFields::default()
        };
        let second = ProfileFields {
            company: Some("Acme".into()),
            ..ProfileFields::default()
        };
        let created = store.upsert(&owner.id, &first).await.unwrap();
        let updated = store.upsert(&owner.id, &second).await.unwrap();

        assert_eq!(created.id, updated.id);
        assert_eq!(updated.bio.as_deref(), Some("first"));
        assert_eq!(updated.company.as_deref(), Some("Acme"));

        let all = store.find_all_with_owners().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].owner.as_ref().map(|o| o.name.as_str()), Some("lee"));
    }

    #[actix_web::test]
    async fn test_pull_experience_removes_only_match() {
        let store = MemoryStore::new();
        let owner = ObjectId::new();
        store.upsert(&owner, &ProfileFields::default()).await.unwrap();

        let make = |title: &str| Experience {
            id: ObjectId::new(),
            title: title.into(),
            company: "Acme".into(),
            location: None,
            from: DateTime::now(),
            to: None,
            description: None,
        };
        let older = make("older");
        let newer = make("newer");
        store.push_experience(&owner, &older).await.unwrap();
        let profile = store.push_experience(&owner, &newer).await.unwrap().unwrap();
        assert_eq!(profile.experience[0].title, "newer");

        assert!(store.pull_experience(&owner, &ObjectId::new()).await.unwrap().is_none());

        let profile = store.pull_experience(&owner, &newer.id).await.unwrap().unwrap();
        assert_eq!(profile.experience, vec![older]);
    }

    #[actix_web::test]
    async fn test_like_guard_and_newest_first() {
        let store = MemoryStore::new();
        let author = user("park");
        let liker = user("choi");

        let mut old = Post::new(&author, "old".into());
        old.date = DateTime::from_millis(1_000);
        let new = Post::new(&author, "new".into());
        PostRepository::create(&store, old).await.unwrap();
        PostRepository::create(&store, new.clone()).await.unwrap();

        let posts = store.find_all_newest_first().await.unwrap();
        assert_eq!(posts[0].text, "new");

        let like = Like::from_user(&liker);
        assert!(store.push_like_if_absent(&new.id, &like).await.unwrap().is_some());
        assert!(store.push_like_if_absent(&new.id, &like).await.unwrap().is_none());

        let post = store.pull_like(&new.id, &liker.id).await.unwrap().unwrap();
        assert!(post.likes.is_empty());
        assert!(store.pull_like(&new.id, &liker.id).await.unwrap().is_none());
    }
}
