//! 게시글 데이터 액세스 계층

pub mod post_repo;

pub use post_repo::{MongoPostRepository, PostRepository};
