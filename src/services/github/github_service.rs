//! # GitHub 서비스 구현
//!
//! 사용자의 최근 공개 저장소 5개를 GitHub REST API에서 가져옵니다.
//!
//! ```text
//! GET {api_base}/users/{username}/repos?per_page=5&sort=created:asc
//! User-Agent: {user_agent}
//! Authorization: token {GITHUB_TOKEN}   (설정된 경우)
//! ```
//!
//! 응답 JSON은 가공하지 않고 그대로 전달합니다. 캐시나 재시도는 하지 않습니다.

use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::GithubConfig;
use crate::errors::AppError;

const NO_GITHUB_PROFILE: &str = "No Github profile found";

/// GitHub API 클라이언트 서비스
#[derive(Clone)]
pub struct GithubService {
    client: reqwest::Client,
    api_base: String,
    user_agent: String,
    token: Option<String>,
}

impl GithubService {
    pub fn new(api_base: impl Into<String>, user_agent: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            user_agent: user_agent.into(),
            token,
        }
    }

    /// `GITHUB_API_BASE`, `GITHUB_USER_AGENT`, `GITHUB_TOKEN` 환경 변수로 생성
    pub fn from_config() -> Self {
        Self::new(GithubConfig::api_base(), GithubConfig::user_agent(), GithubConfig::token())
    }

    /// 저장소 목록 URL. 사용자 이름은 경로 세그먼트로 인코딩됩니다.
    pub fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?per_page=5&sort=created:asc",
            self.api_base,
            urlencoding::encode(username)
        )
    }

    /// 사용자의 최근 저장소 목록
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - 네트워크 오류, 200이 아닌 응답, JSON 파싱 실패
    pub async fn fetch_repos(&self, username: &str) -> Result<Value, AppError> {
        let mut request = self
            .client
            .get(self.repos_url(username))
            .header(USER_AGENT, &self.user_agent);

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await.map_err(|e| {
            log::warn!("GitHub 요청 실패: {} - {}", username, e);
            Self::not_found()
        })?;

        if response.status() != StatusCode::OK {
            log::warn!("GitHub 응답 상태 {}: {}", response.status(), username);
            return Err(Self::not_found());
        }

        response.json::<Value>().await.map_err(|e| {
            log::warn!("GitHub 응답 파싱 실패: {} - {}", username, e);
            Self::not_found()
        })
    }

    fn not_found() -> AppError {
        AppError::ExternalServiceError(NO_GITHUB_PROFILE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repos_url_encodes_username() {
        let service = GithubService::new("https://api.github.com/", "test-agent", None);

        assert_eq!(
            service.repos_url("octocat"),
            "https://api.github.com/users/octocat/repos?per_page=5&sort=created:asc"
        );
        assert_eq!(
            service.repos_url("a b/c"),
            "https://api.github.com/users/a%20b%2Fc/repos?per_page=5&sort=created:asc"
        );
    }

    #[actix_web::test]
    async fn test_unreachable_api_is_external_error() {
        let service = GithubService::new("http://127.0.0.1:9", "test-agent", Some("token".into()));

        match service.fetch_repos("octocat").await {
            Err(AppError::ExternalServiceError(msg)) => assert_eq!(msg, NO_GITHUB_PROFILE),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
