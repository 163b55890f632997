//! # Service Layer
//!
//! 비즈니스 로직을 담당하는 서비스들입니다. 각 서비스는 리포지토리 trait 객체를
//! 생성자로 주입받으며, [`ServiceContainer`](crate::core::ServiceContainer)가
//! 프로세스 시작 시 한 번 만들어 핸들러에 `web::Data`로 공유합니다.
//!
//! ```text
//! Handler ──▶ Service ──▶ Arc<dyn Repository> ──▶ MongoDB | MemoryStore
//! ```
//!
//! | 서비스 | 책임 |
//! |--------|------|
//! | [`UserService`](users::UserService) | 회원가입, 로그인, 현재 사용자 |
//! | [`TokenService`](auth::TokenService) | JWT 발급/검증 |
//! | [`ProfileService`](profiles::ProfileService) | 프로필 upsert, 경력, 계정 삭제 |
//! | [`PostService`](posts::PostService) | 게시글, 좋아요, 댓글 |
//! | [`GithubService`](github::GithubService) | GitHub 저장소 조회 |

pub mod auth;
pub mod github;
pub mod posts;
pub mod profiles;
pub mod users;
