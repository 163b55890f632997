//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT 관련 설정
//! - [`external_config`] - GitHub API 연동 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # 저장소
//! export DATA_STORE="mongodb"            # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="social_network_dev"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="100"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"        # development, test, staging, production
//! export BCRYPT_COST="12"                # 4-15 범위
//!
//! # GitHub
//! export GITHUB_TOKEN="ghp_xxx"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod external_config;

pub use data_config::*;
pub use auth_config::*;
pub use external_config::*;
