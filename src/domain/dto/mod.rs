//! # Data Transfer Objects Module
//!
//! HTTP 계층과 서비스 계층 사이에서 교환되는 요청/응답 구조를 정의합니다.
//! 엔티티를 직접 노출하지 않고, id는 24자리 16진수 문자열로, 날짜는 RFC 3339로
//! 변환해서 내보냅니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/      # 회원가입, 로그인, 현재 사용자
//! ├── profiles/   # 프로필 upsert, 경력
//! └── posts/      # 게시글, 댓글, 좋아요
//! ```
//!
//! ## 검증 규칙
//!
//! 요청 DTO는 구조체 단위 `#[serde(default)]`를 사용합니다. 필수 필드가 빠지면
//! 역직렬화 에러 대신 `validator` 검증 에러가 되어 필드별 메시지로 응답됩니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_post(
//!     user: AuthenticatedUser,
//!     payload: web::Json<PostRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     // ...
//! }
//! ```

pub mod posts;
pub mod profiles;
pub mod users;
