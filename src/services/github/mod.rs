//! GitHub 저장소 조회 서비스

pub mod github_service;

pub use github_service::GithubService;
