//! # Core Module
//!
//! 애플리케이션 조립 계층입니다. 프로세스 시작 시 리포지토리와 서비스를
//! 한 번만 만들고 actix-web 앱 데이터로 주입합니다.
//!
//! ```text
//! DataStoreConfig ─▶ MongoDB │ MemoryStore
//!                         │
//!                         ▼
//!                  ServiceContainer ─▶ web::Data<UserService>, web::Data<PostService>, ...
//! ```
//!
//! 전역 싱글톤은 없습니다. 테스트는 [`ServiceContainer::in_memory`]로
//! 같은 그래프를 메모리 저장소 위에 구성합니다.

pub mod container;

pub use container::ServiceContainer;
