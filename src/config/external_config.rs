//! 외부 API 연동 설정
//!
//! GitHub REST API 호출에 필요한 값들을 환경 변수에서 읽어옵니다.

use std::env;

/// GitHub API 설정
///
/// ```bash
/// export GITHUB_TOKEN="ghp_xxx"          # 선택: 없으면 비인증 요청 (rate limit 낮음)
/// export GITHUB_API_BASE="https://api.github.com"
/// export GITHUB_USER_AGENT="social-network-backend"
/// ```
pub struct GithubConfig;

impl GithubConfig {
    /// 개인 액세스 토큰. 비어 있으면 `None`.
    pub fn token() -> Option<String> {
        env::var("GITHUB_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    pub fn api_base() -> String {
        env::var("GITHUB_API_BASE")
            .unwrap_or_else(|_| "https://api.github.com".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// GitHub API는 User-Agent 헤더가 없는 요청을 거부합니다.
    pub fn user_agent() -> String {
        env::var("GITHUB_USER_AGENT").unwrap_or_else(|_| "social-network-backend".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!GithubConfig::api_base().ends_with('/'));
    }

    #[test]
    fn test_user_agent_is_present() {
        assert!(!GithubConfig::user_agent().is_empty());
    }
}
