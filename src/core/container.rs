//! 서비스 컨테이너
//!
//! 저장소 구현(MongoDB 또는 메모리)을 선택해 리포지토리 trait 객체를 만들고,
//! 그 위에 서비스 그래프를 구성합니다.

use std::sync::Arc;

use actix_web::web;
use log::info;

use crate::config::{DataStoreConfig, DataStoreKind, PasswordConfig};
use crate::db::Database;
use crate::errors::{json_error_handler, AppError};
use crate::repositories::memory::MemoryStore;
use crate::repositories::posts::{MongoPostRepository, PostRepository};
use crate::repositories::profiles::{MongoProfileRepository, ProfileRepository};
use crate::repositories::users::{MongoUserRepository, UserRepository};
use crate::services::auth::TokenService;
use crate::services::github::GithubService;
use crate::services::posts::PostService;
use crate::services::profiles::ProfileService;
use crate::services::users::UserService;

/// 리포지토리 묶음
struct Repositories {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn ProfileRepository>,
    posts: Arc<dyn PostRepository>,
}

/// 애플리케이션 서비스 그래프
///
/// `Clone`은 `Arc`만 복사하므로 `HttpServer::new` 클로저에서 워커마다
/// 복제해도 같은 인스턴스를 공유합니다.
#[derive(Clone)]
pub struct ServiceContainer {
    pub tokens: Arc<TokenService>,
    pub users: Arc<UserService>,
    pub profiles: Arc<ProfileService>,
    pub posts: Arc<PostService>,
    pub github: Arc<GithubService>,
}

impl ServiceContainer {
    /// `DATA_STORE` 설정에 따라 컨테이너를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - MongoDB 연결 또는 인덱스 생성 실패
    pub async fn from_config() -> Result<Self, AppError> {
        match DataStoreConfig::kind() {
            DataStoreKind::MongoDb => {
                let database = Database::new()
                    .await
                    .map_err(|e| AppError::DatabaseError(format!("MongoDB 연결 실패: {}", e)))?;
                Self::with_mongo(&database).await
            }
            DataStoreKind::Memory => {
                info!("메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
                Ok(Self::with_memory(
                    TokenService::from_config(),
                    GithubService::from_config(),
                    PasswordConfig::bcrypt_cost(),
                ))
            }
        }
    }

    /// MongoDB 리포지토리로 구성하고 인덱스를 보장합니다.
    pub async fn with_mongo(database: &Database) -> Result<Self, AppError> {
        let users = MongoUserRepository::new(database);
        let profiles = MongoProfileRepository::new(database);
        let posts = MongoPostRepository::new(database);

        users.create_indexes().await?;
        profiles.create_indexes().await?;
        posts.create_indexes().await?;
        info!("✅ MongoDB 인덱스 확인 완료: {}", database.database_name());

        let repositories = Repositories {
            users: Arc::new(users),
            profiles: Arc::new(profiles),
            posts: Arc::new(posts),
        };

        Ok(Self::assemble(
            repositories,
            TokenService::from_config(),
            GithubService::from_config(),
            PasswordConfig::bcrypt_cost(),
        ))
    }

    /// 하나의 [`MemoryStore`]를 세 리포지토리로 공유해 구성합니다.
    pub fn with_memory(tokens: TokenService, github: GithubService, bcrypt_cost: u32) -> Self {
        let store = Arc::new(MemoryStore::new());
        let repositories = Repositories {
            users: store.clone(),
            profiles: store.clone(),
            posts: store,
        };

        Self::assemble(repositories, tokens, github, bcrypt_cost)
    }

    /// 테스트용 구성: 고정 비밀키, 최소 bcrypt cost, 접근 불가능한 GitHub 주소
    pub fn in_memory() -> Self {
        Self::with_memory(
            TokenService::new("test-secret", 1),
            GithubService::new("http://127.0.0.1:9", "social-network-test", None),
            4,
        )
    }

    fn assemble(
        repositories: Repositories,
        tokens: TokenService,
        github: GithubService,
        bcrypt_cost: u32,
    ) -> Self {
        let tokens = Arc::new(tokens);
        let users = UserService::new(repositories.users.clone(), tokens.clone(), bcrypt_cost);
        let profiles = ProfileService::new(repositories.profiles, repositories.users.clone());
        let posts = PostService::new(repositories.posts, repositories.users);

        Self {
            tokens,
            users: Arc::new(users),
            profiles: Arc::new(profiles),
            posts: Arc::new(posts),
            github: Arc::new(github),
        }
    }

    /// 앱 데이터 등록
    ///
    /// ```rust,ignore
    /// App::new()
    ///     .configure(|cfg| container.configure(cfg))
    ///     .configure(configure_all_routes)
    /// ```
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.tokens.clone()))
            .app_data(web::Data::from(self.users.clone()))
            .app_data(web::Data::from(self.profiles.clone()))
            .app_data(web::Data::from(self.posts.clone()))
            .app_data(web::Data::from(self.github.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{call_service, init_service, TestRequest};
    use actix_web::{App, HttpResponse};

    async fn require_services(
        _users: web::Data<UserService>,
        _profiles: web::Data<ProfileService>,
        _posts: web::Data<PostService>,
        _github: web::Data<GithubService>,
        _tokens: web::Data<TokenService>,
    ) -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    #[actix_web::test]
    async fn test_configure_registers_every_service() {
        let container = ServiceContainer::in_memory();
        let app = init_service(
            App::new()
                .configure(|cfg| container.configure(cfg))
                .route("/services", web::get().to(require_services)),
        )
        .await;

        let response = call_service(&app, TestRequest::get().uri("/services").to_request()).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_clones_share_services() {
        let container = ServiceContainer::in_memory();
        let copy = container.clone();

        assert!(Arc::ptr_eq(&container.posts, &copy.posts));
        assert!(Arc::ptr_eq(&container.tokens, &copy.tokens));
    }
}
