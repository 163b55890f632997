pub mod post_request;

pub use post_request::{CommentRequest, PostRequest};
