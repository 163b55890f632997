//! 프로필 데이터 액세스 계층

pub mod profile_repo;

pub use profile_repo::{MongoProfileRepository, ProfileRepository};
