//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 등록, 인증, 조회를 담당합니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost (개발 4, 운영 12 기본값)
//! - **민감 정보 제거**: 응답 DTO에는 비밀번호 해시가 없음
//! - **실패 메시지 통일**: 존재하지 않는 이메일과 틀린 비밀번호를 구분하지 않음

use std::sync::Arc;

use bcrypt::hash;
use mongodb::bson::oid::ObjectId;
use sha2::{Digest, Sha256};

use crate::domain::dto::users::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use crate::domain::entities::users::User;
use crate::errors::{AppError, ErrorContext};
use crate::repositories::users::UserRepository;
use crate::services::auth::TokenService;

/// 이메일로 gravatar 이미지 URL을 만듭니다.
///
/// 공백 제거, 소문자화한 이메일의 SHA-256 해시를 사용합니다.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    format!("https://www.gravatar.com/avatar/{:x}?s=200&r=pg&d=mm", digest)
}

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// 새 사용자 계정 생성 후 토큰 발급
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenResponse)` - 새 계정의 JWT
    /// * `Err(AppError::ValidationError)` - 이미 가입된 이메일 (`email` 필드)
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 또는 토큰 생성 실패
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, AppError> {
        let request = request.normalized();

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(Self::already_exists());
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let avatar = gravatar_url(&request.email);
        let user = User::new(request.name, request.email, password_hash, avatar);

        // 조회와 저장 사이에 같은 이메일이 먼저 저장된 경우
        let user = match self.users.create(user).await {
            Err(AppError::ConflictError(_)) => return Err(Self::already_exists()),
            other => other?,
        };

        log::info!("사용자 가입: {} ({})", user.email, user.id_string());

        Ok(TokenResponse::new(self.tokens.generate_token(&user)?))
    }

    /// 이메일/비밀번호 로그인
    ///
    /// * `Err(AppError::ValidationError)` - "Invalid credentials"
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, AppError> {
        let email = request.email.trim().to_lowercase();

        let Some(user) = self.users.find_by_email(&email).await? else {
            log::warn!("로그인 실패 (알 수 없는 이메일): {}", email);
            return Err(Self::invalid_credentials());
        };

        let is_valid = bcrypt::verify(&request.password, &user.password)
            .context("비밀번호 검증 실패")?;

        if !is_valid {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(Self::invalid_credentials());
        }

        Ok(TokenResponse::new(self.tokens.generate_token(&user)?))
    }

    /// 토큰 주체의 사용자 정보
    pub async fn current_user(&self, user_id: &ObjectId) -> Result<UserResponse, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    fn already_exists() -> AppError {
        AppError::validation("email", "User already exists")
    }

    fn invalid_credentials() -> AppError {
        AppError::validation("credentials", "Invalid credentials")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryStore;

    fn service() -> (UserService, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new("test-secret", 1));
        let service = UserService::new(Arc::new(MemoryStore::new()), tokens.clone(), 4);
        (service, tokens)
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Kim".into(),
            email: email.into(),
            password: "secret1".into(),
        }
    }

    #[test]
    fn test_gravatar_url_normalizes_email() {
        let a = gravatar_url(" Kim@Example.com ");
        let b = gravatar_url("kim@example.com");

        assert_eq!(a, b);
        assert!(a.starts_with("https://www.gravatar.com/avatar/"));
        assert!(a.ends_with("?s=200&r=pg&d=mm"));
    }

    #[actix_web::test]
    async fn test_register_then_login() {
        let (service, tokens) = service();

        let registered = service.register(register_request("Kim@Example.com")).await.unwrap();
        let claims = tokens.verify_token(&registered.token).unwrap();

        let login = service
            .login(LoginRequest {
                email: "kim@example.com".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();
        assert_eq!(tokens.verify_token(&login.token).unwrap().sub, claims.sub);

        let user_id = ObjectId::parse_str(&claims.sub).unwrap();
        let me = service.current_user(&user_id).await.unwrap();
        assert_eq!(me.email, "kim@example.com");
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_email_field_error() {
        let (service, _) = service();
        service.register(register_request("kim@example.com")).await.unwrap();

        match service.register(register_request("KIM@example.com")).await {
            Err(AppError::ValidationError(errors)) => {
                assert_eq!(errors[0].field, "email");
                assert_eq!(errors[0].message, "User already exists");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let (service, _) = service();
        service.register(register_request("kim@example.com")).await.unwrap();

        let result = service
            .login(LoginRequest {
                email: "kim@example.com".into(),
                password: "wrong-password".into(),
            })
            .await;

        match result {
            Err(AppError::ValidationError(errors)) => assert_eq!(errors[0].message, "Invalid credentials"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_current_user_missing_is_not_found() {
        let (service, _) = service();

        assert!(matches!(
            service.current_user(&ObjectId::new()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
