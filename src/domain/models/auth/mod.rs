pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::{AuthRejection, AuthenticatedUser};
pub use authentication_request::AuthMode;
