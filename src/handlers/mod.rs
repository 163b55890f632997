//! # HTTP Handlers
//!
//! 핸들러는 얇은 조율 계층입니다.
//!
//! ```text
//! 요청 ─▶ JSON 추출 ─▶ validate() ─▶ AuthenticatedUser ─▶ Service ─▶ JSON 응답
//! ```
//!
//! 서비스는 `web::Data<...>`로 주입되며, 모든 핸들러는 `Result<HttpResponse, AppError>`를
//! 반환해 에러 응답 형식을 [`AppError`](crate::errors::AppError)에 맡깁니다.

pub mod auth;
pub mod posts;
pub mod profiles;
pub mod users;
