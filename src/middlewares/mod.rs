//! # HTTP 미들웨어
//!
//! - [`AuthMiddleware`]: `Authorization: Bearer <jwt>` 헤더를 검증하고
//!   [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//!   request extensions에 넣습니다.
//!
//! ```rust,ignore
//! web::scope("/api/post")
//!     .wrap(AuthMiddleware::required())
//!     .service(create_post)
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
